pub mod mf {
    //! [SPARQL test manifest](http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const ACTION: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#action",
    );
    pub const CONFORMANCE_REQUIREMENTS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#conformanceRequirements",
    );
    pub const CSV_RESULT_FORMAT_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#CSVResultFormatTest",
    );
    pub const ENTRIES: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#entries",
    );
    pub const INCLUDE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#include",
    );
    pub const LAX_CARDINALITY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#LaxCardinality",
    );
    pub const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#name",
    );
    pub const NEGATIVE_SYNTAX_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#NegativeSyntaxTest",
    );
    pub const NEGATIVE_SYNTAX_TEST_11: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#NegativeSyntaxTest11",
    );
    pub const NEGATIVE_UPDATE_SYNTAX_TEST_11: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#NegativeUpdateSyntaxTest11",
    );
    pub const POSITIVE_SYNTAX_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#PositiveSyntaxTest",
    );
    pub const POSITIVE_SYNTAX_TEST_11: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#PositiveSyntaxTest11",
    );
    pub const POSITIVE_UPDATE_SYNTAX_TEST_11: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#PositiveUpdateSyntaxTest11",
    );
    pub const QUERY_EVALUATION_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#QueryEvaluationTest",
    );
    pub const RESULT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#result",
    );
    pub const RESULT_CARDINALITY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#resultCardinality",
    );
    pub const SPECIFICATIONS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#specifications",
    );
    pub const UPDATE_EVALUATION_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#UpdateEvaluationTest",
    );
}

pub mod qt {
    //! [SPARQL query test](http://www.w3.org/2001/sw/DataAccess/tests/test-query#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const DATA: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/sw/DataAccess/tests/test-query#data");
    pub const GRAPH_DATA: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-query#graphData",
    );
    pub const QUERY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/sw/DataAccess/tests/test-query#query");
}

pub mod ut {
    //! [SPARQL update test](http://www.w3.org/2009/sparql/tests/test-update#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const DATA: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2009/sparql/tests/test-update#data");
    pub const GRAPH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2009/sparql/tests/test-update#graph");
    pub const GRAPH_DATA: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2009/sparql/tests/test-update#graphData");
    pub const REQUEST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2009/sparql/tests/test-update#request");
    pub const UPDATE_EVALUATION_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2009/sparql/tests/test-update#UpdateEvaluationTest",
    );
}

pub mod dawgt {
    //! [DAWG test](http://www.w3.org/2001/sw/DataAccess/tests/test-dawg#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const APPROVAL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-dawg#approval",
    );
    pub const APPROVED_BY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-dawg#approvedBy",
    );
    pub const WITHDRAWN: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/test-dawg#Withdrawn",
    );
}

pub mod rdft {
    //! [RDF test](http://www.w3.org/ns/rdftest#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const APPROVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#approval");
    pub const REJECTED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#Rejected");
    pub const TEST_N_QUADS_NEGATIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestNQuadsNegativeSyntax");
    pub const TEST_N_QUADS_POSITIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestNQuadsPositiveSyntax");
    pub const TEST_N_TRIPLES_NEGATIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestNTriplesNegativeSyntax");
    pub const TEST_N_TRIPLES_POSITIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestNTriplesPositiveSyntax");
    pub const TEST_TRIG_EVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTrigEval");
    pub const TEST_TRIG_NEGATIVE_EVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTrigNegativeEval");
    pub const TEST_TRIG_NEGATIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTrigNegativeSyntax");
    pub const TEST_TRIG_POSITIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTrigPositiveSyntax");
    pub const TEST_TURTLE_EVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTurtleEval");
    pub const TEST_TURTLE_NEGATIVE_EVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTurtleNegativeEval");
    pub const TEST_TURTLE_NEGATIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTurtleNegativeSyntax");
    pub const TEST_TURTLE_POSITIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestTurtlePositiveSyntax");
    pub const TEST_XML_EVAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestXMLEval");
    pub const TEST_XML_NEGATIVE_SYNTAX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/rdftest#TestXMLNegativeSyntax");
}

pub mod jld {
    //! [JSON-LD test](https://w3c.github.io/json-ld-api/tests/vocab#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const FROM_RDF_TEST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3c.github.io/json-ld-api/tests/vocab#FromRDFTest");
    pub const NEGATIVE_EVALUATION_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "https://w3c.github.io/json-ld-api/tests/vocab#NegativeEvaluationTest",
    );
    pub const POSITIVE_EVALUATION_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "https://w3c.github.io/json-ld-api/tests/vocab#PositiveEvaluationTest",
    );
    pub const POSITIVE_SYNTAX_TEST: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "https://w3c.github.io/json-ld-api/tests/vocab#PositiveSyntaxTest",
    );
    pub const TO_RDF_TEST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3c.github.io/json-ld-api/tests/vocab#ToRDFTest");
}

pub mod rs {
    //! [SPARQL result set](http://www.w3.org/2001/sw/DataAccess/tests/result-set#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const BINDING: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#binding",
    );
    pub const BOOLEAN: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#boolean",
    );
    pub const INDEX: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#index",
    );
    pub const RESULT_SET: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#ResultSet",
    );
    pub const RESULT_VARIABLE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#resultVariable",
    );
    pub const SOLUTION: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#solution",
    );
    pub const VALUE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#value",
    );
    pub const VARIABLE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "http://www.w3.org/2001/sw/DataAccess/tests/result-set#variable",
    );
}

pub mod earl {
    //! [EARL](http://www.w3.org/ns/earl#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const ASSERTED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#assertedBy");
    pub const ASSERTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#Assertion");
    pub const AUTOMATIC: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#automatic");
    pub const FAILED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#failed");
    pub const INAPPLICABLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#inapplicable");
    pub const MODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#mode");
    pub const OUTCOME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#outcome");
    pub const PASSED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#passed");
    pub const RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#result");
    pub const SOFTWARE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#Software");
    pub const SUBJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#subject");
    pub const TEST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#test");
    pub const TEST_RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/earl#TestResult");
}

pub mod doap {
    //! [DOAP](http://usefulinc.com/ns/doap#) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const DEVELOPER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#developer");
    pub const HOMEPAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#homepage");
    pub const NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#name");
    pub const PROJECT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://usefulinc.com/ns/doap#Project");
}

pub mod foaf {
    //! [FOAF](http://xmlns.com/foaf/0.1/) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
    pub const PERSON: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Person");
}

pub mod dc {
    //! [Dublin Core terms](http://purl.org/dc/terms/) vocabulary.

    use oxrdf::NamedNodeRef;

    pub const DATE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://purl.org/dc/terms/date");
}
