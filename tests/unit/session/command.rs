use super::*;

fn parse(line: &str) -> RasterResult<Option<Command>> {
    Command::parse(line, &OperationRegistry::new())
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse("").unwrap(), None);
    assert_eq!(parse("   ").unwrap(), None);
    assert_eq!(parse("# load koala.ppm koala").unwrap(), None);
}

#[test]
fn control_commands() {
    assert_eq!(parse("q").unwrap(), Some(Command::Quit));
    assert_eq!(parse("QUIT").unwrap(), Some(Command::Quit));
    assert_eq!(parse("menu").unwrap(), Some(Command::Menu));
    assert_eq!(
        parse("load images/koala.ppm koala").unwrap(),
        Some(Command::Load {
            path: PathBuf::from("images/koala.ppm"),
            name: "koala".to_string(),
        })
    );
    assert_eq!(
        parse("save out/koala-red.png koala-red").unwrap(),
        Some(Command::Save {
            path: PathBuf::from("out/koala-red.png"),
            name: "koala-red".to_string(),
        })
    );
}

#[test]
fn operations_use_registry_arity() {
    assert_eq!(
        parse("red-component koala koala-red").unwrap(),
        Some(Command::Transform {
            op: "red-component".to_string(),
            args: vec![],
            source: "koala".to_string(),
            result: "koala-red".to_string(),
        })
    );
    assert_eq!(
        parse("brighten -10  koala koala-dark").unwrap(),
        Some(Command::Transform {
            op: "brighten".to_string(),
            args: vec!["-10".to_string()],
            source: "koala".to_string(),
            result: "koala-dark".to_string(),
        })
    );
}

#[test]
fn arity_and_name_errors() {
    assert!(matches!(parse("load koala.ppm"), Err(RasterError::InvalidArgument(_))));
    assert!(matches!(parse("blur koala"), Err(RasterError::InvalidArgument(_))));
    assert!(matches!(
        parse("mosaic koala koala-m"),
        Err(RasterError::InvalidArgument(_))
    ));
    assert!(matches!(
        parse("emboss koala out"),
        Err(RasterError::UnknownCommand(_))
    ));
}
