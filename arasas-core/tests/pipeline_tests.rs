//! End-to-end tests for the annotation pipeline

use arasas_core::metrics::Metrics;
use arasas_core::{
    AnnotateError, AnnotateOptions, Annotator, Lexicon, MleDisambiguator, MorphologyDb,
    OutputFormat,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const MORPHOLOGY: &str = "form\tpos\tlemma\tgloss\tscore\n\
ذهب\tverb\tذَهَب-a_1\tgo\t0.8\n\
ذهب\tnoun\tذَهَب_1\tgold\t0.2\n\
الولد\tnoun\tوَلَد_1\tboy\t1\n\
إلى\tprep\tإِلَى_1\tto\t1\n\
المدرسة\tnoun\tمَدْرَسَة_1\tschool\t1\n\
قرأ\tverb\tقَرَأ-a_1\tread\t1\n\
كتابا\tnoun\tكِتاب_1\tbook\t1\n\
سريعا\tadj\tسَرِيع_1\tfast\t1\n";

const LEXICON: &str = "lemma\tsem\tmarker\n\
ذَهَب\tM1\t-a_1\n\
وَلَد\tS2.2 T3\t_1\n\
مَدْرَسَة\tP1 H1\t\n\
كِتاب\tQ4.1\t\n\
إِلَى\tZ99\t_1\n";

fn annotator() -> Annotator {
    let db = MorphologyDb::parse(MORPHOLOGY).unwrap();
    Annotator::builder()
        .disambiguator(Arc::new(MleDisambiguator::new(Arc::new(db))))
        .build()
        .unwrap()
}

fn lexicon() -> Lexicon {
    Lexicon::parse(LEXICON).unwrap()
}

fn run(text: &str, format: OutputFormat) -> arasas_core::AnnotationResult {
    annotator()
        .annotate(text, &lexicon(), &AnnotateOptions::new(format))
        .unwrap()
}

fn assert_partition(metrics: &Metrics) {
    assert_eq!(
        metrics.tokens,
        metrics.tokens_untagged + metrics.tokens_punctuation + metrics.tokens_tagged
    );
}

#[test]
fn test_vertical_output_separates_sentences() {
    let result = run("ذهب الولد إلى المدرسة. قرأ كتابا", OutputFormat::Vertical);

    assert_eq!(
        result.formatted,
        "verb\tذهب\tM1\n\
         noun\tالولد\tS2.2 T3\n\
         prep\tإلى\tZ99\n\
         noun\tالمدرسة\tP1 H1\n\
         punc\t.\tPUNC\n\
         \n\
         verb\tقرأ\tZ99\n\
         noun\tكتابا\tQ4.1"
    );
    assert_eq!(result.metrics.sentences, 2);
    assert_eq!(result.metrics.tokens, 7);
    assert_eq!(result.metrics.tokens_untagged, 2);
    assert_eq!(result.metrics.tokens_punctuation, 1);
    assert_partition(&result.metrics);
}

#[test]
fn test_horizontal_output_has_no_sentence_boundaries() {
    let result = run("ذهب الولد. قرأ كتابا", OutputFormat::Horizontal);
    assert_eq!(result.formatted, "ذهب_M1 الولد_S2.2 ._PUNC قرأ_Z99 كتابا_Q4.1");
}

#[test]
fn test_xml_full_tags() {
    let options = AnnotateOptions::new(OutputFormat::Xml).xml_full_tags(true);
    let result = annotator()
        .annotate("الولد", &lexicon(), &options)
        .unwrap();
    assert_eq!(
        result.formatted,
        r#"<w id="1.1" pos="noun" sem="S2.2 T3">الولد</w>"#
    );
}

#[test]
fn test_numerals_and_unknown_words() {
    let result = run("سريعا 123 مجهول", OutputFormat::Vertical);
    let tokens = &result.sentences[0].tokens;

    assert_eq!(tokens[0].semantic_tags, "Z99");
    assert_eq!(tokens[1].pos, "digit");
    assert_eq!(tokens[1].semantic_tags, "N1 T1.2 T3 T1.3 N3.2");
    assert_eq!(tokens[2].pos, "");
    assert_eq!(tokens[2].lemma, "");
    assert_eq!(tokens[2].semantic_tags, "Z99");
    assert_eq!(result.metrics.tokens_tagged, 1);
    assert_eq!(result.metrics.tokens_untagged, 2);
}

#[test]
fn test_comment_lines_are_ignored() {
    let with_comments = run("# ذهب الولد\nقرأ كتابا\n   # 123", OutputFormat::Vertical);
    let without = run("قرأ كتابا", OutputFormat::Vertical);

    assert_eq!(with_comments.formatted, without.formatted);
    assert_eq!(with_comments.metrics.counters(), without.metrics.counters());
    assert!(!with_comments.formatted.contains("الولد"));
}

#[test]
fn test_arabic_question_mark_ends_sentence() {
    let result = run("ذهب الولد؟ قرأ كتابا", OutputFormat::Vertical);
    assert_eq!(result.metrics.sentences, 2);
    assert_eq!(result.sentences[0].tokens.last().unwrap().form, "?");
}

#[test]
fn test_byte_order_mark_is_dropped() {
    let result = run("\u{FEFF}الولد", OutputFormat::Horizontal);
    assert_eq!(result.formatted, "الولد_S2.2");
}

#[test]
fn test_annotation_is_idempotent() {
    let annotator = annotator();
    let lexicon = lexicon();
    let options = AnnotateOptions::new(OutputFormat::Xml);
    let text = "ذهب الولد إلى المدرسة. قرأ كتابا 42!";

    let first = annotator.annotate(text, &lexicon, &options).unwrap();
    let second = annotator.annotate(text, &lexicon, &options).unwrap();

    assert_eq!(first.formatted, second.formatted);
    assert_eq!(first.metrics.counters(), second.metrics.counters());
    assert_eq!(first.sentences, second.sentences);
}

#[test]
fn test_empty_text_has_null_coverage() {
    let result = run("", OutputFormat::Vertical);
    assert_eq!(result.formatted, "");
    assert_eq!(result.metrics.tokens, 0);
    assert_eq!(result.metrics.token_coverage, None);

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["log"]["token_coverage"].is_null());
}

#[test]
fn test_result_json_shape() {
    let result = run("الولد.", OutputFormat::Vertical);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["string"], "noun\tالولد\tS2.2 T3\npunc\t.\tPUNC");
    assert_eq!(json["log"]["tokens"], 2);
    assert_eq!(json["log"]["tokens_punctuation"], 1);
    assert_eq!(json["log"]["token_coverage"], 1.0);
    assert!(json["log"]["segmentation"].is_f64());
    assert_eq!(json["output"][0]["tokens"][0]["lemma"], "وَلَد_1");
}

#[test]
fn test_annotate_with_lexicon_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexicon.usas");
    fs::write(&path, LEXICON).unwrap();

    let result = annotator()
        .annotate_with_lexicon_path("الولد", &path, &AnnotateOptions::default())
        .unwrap();
    assert_eq!(result.formatted, "noun\tالولد\tS2.2 T3");
}

#[test]
fn test_missing_lexicon_file() {
    let err = annotator()
        .annotate_with_lexicon_path(
            "الولد",
            std::path::Path::new("/nonexistent/lexicon.usas"),
            &AnnotateOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, AnnotateError::FileAccess { .. }));
}

#[test]
fn test_malformed_lexicon_fails_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexicon.usas");
    fs::write(&path, "وَلَد\tS2.2\t_1\nbroken line\n").unwrap();

    let err = annotator()
        .annotate_with_lexicon_path("الولد", &path, &AnnotateOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        AnnotateError::MalformedLexicon {
            line: 2,
            columns: 1
        }
    ));
}

#[test]
fn test_free_function_requires_default_data_dir() {
    let dir = TempDir::new().unwrap();
    let lexicon = dir.path().join("lexicon.usas");
    fs::write(&lexicon, LEXICON).unwrap();

    // The default data directory is relative and absent from the crate root
    let err = arasas_core::annotate("الولد", Some("xml"), &lexicon, false).unwrap_err();
    assert!(err.is_resource_missing());
}

#[test]
fn test_free_function_rejects_unknown_format() {
    let err = arasas_core::annotate("الولد", Some("json"), std::path::Path::new("x"), false)
        .unwrap_err();
    assert!(matches!(err, AnnotateError::UnknownFormat(_)));
}
