use super::*;

fn c_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("'''", "'''"), ("\"\"\"", "\"\"\"")])
}

#[test]
fn single_line_prefix() {
    let syntax = c_syntax();
    let detector = CommentDetector::new(&syntax);

    assert!(detector.is_single_line_comment("// hello"));
    assert!(!detector.is_single_line_comment("let x = 1; // trailing"));
}

#[test]
fn block_start_at_line_start() {
    let syntax = c_syntax();
    let detector = CommentDetector::new(&syntax);

    let block = detector.find_block_start("/* doc").unwrap();
    assert_eq!(block.position, 0);
    assert_eq!(block.end, "*/");
}

#[test]
fn block_start_inside_string_is_ignored() {
    let syntax = c_syntax();
    let detector = CommentDetector::new(&syntax);

    assert!(detector.find_block_start(r#"let s = "/* not a comment";"#).is_none());
    assert!(
        detector
            .find_block_start(r#"let s = "escaped \" quote /* still string";"#)
            .is_none()
    );
}

#[test]
fn block_start_after_string() {
    let syntax = c_syntax();
    let detector = CommentDetector::new(&syntax);

    let block = detector.find_block_start(r#"f("x"); /* real"#).unwrap();
    assert_eq!(block.position, 8);
}

#[test]
fn line_comment_hides_later_block_opener() {
    let syntax = c_syntax();
    let detector = CommentDetector::new(&syntax);

    assert!(detector.find_block_start("x = 1; // see /* here").is_none());
}

#[test]
fn quote_delimited_block_markers() {
    let syntax = python_syntax();
    let detector = CommentDetector::new(&syntax);

    let block = detector.find_block_start("    \"\"\"Docstring").unwrap();
    assert_eq!(block.start, "\"\"\"");
    assert_eq!(block.position, 4);
}

#[test]
fn no_block_syntax() {
    let syntax = CommentSyntax::new(vec!["#"], vec![]);
    let detector = CommentDetector::new(&syntax);
    assert!(detector.find_block_start("anything /* here").is_none());
}

#[test]
fn block_end_detection() {
    assert!(CommentDetector::contains_block_end("end */", "*/"));
    assert!(!CommentDetector::contains_block_end("still going", "*/"));
}
