//! Library integration tests.

use ngseed::resolver::{render_template, GenerationPlan, ModuleSet, Operation};
use ngseed::scaffold::{FsScaffolder, RecordingScaffolder, Scaffolder};
use ngseed::selection::{CssFramework, JsLibrary, SelectionState, TestFramework};
use ngseed::ui::MockUI;
use ngseed::NgseedError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = NgseedError::UnknownCssFramework {
        value: "Foundation".into(),
        expected: "SASSBootstrap, NativeBootstrap, CompassFramework".into(),
    };
    assert!(err.to_string().contains("Foundation"));
    assert!(err.is_configuration());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ngseed::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use ngseed::cli::{Cli, Commands};

    let cli = Cli::parse_from(["ngseed", "new", "site", "--skip-install"]);
    let Some(Commands::New(args)) = cli.command else {
        panic!("Expected New command");
    };
    assert!(args.skip_install);
    assert_eq!(args.directory.as_deref(), Some(std::path::Path::new("site")));
}

#[test]
fn selection_from_prompt_answers() {
    let selection = SelectionState::from_answers(
        "shop",
        "SASSBootstrap",
        &["includeUnderscore".to_string(), "includeJasmine".to_string()],
        TestFramework::Mocha,
    )
    .unwrap();

    assert!(selection.includes(JsLibrary::Underscore));
    assert_eq!(selection.test_framework(), TestFramework::Jasmine);

    let modules = ModuleSet::resolve(&selection);
    assert!(modules.names().contains(&"underscore"));
    assert_eq!(modules.names().last(), Some(&"bootstrap"));
}

#[test]
fn unknown_answer_values_are_configuration_errors() {
    let err = SelectionState::from_answers("shop", "Foundation", &[], TestFramework::Mocha)
        .unwrap_err();
    assert!(matches!(err, NgseedError::UnknownCssFramework { .. }));

    let err = SelectionState::from_answers(
        "shop",
        "CompassFramework",
        &["includeJQueryUI".to_string()],
        TestFramework::Mocha,
    )
    .unwrap_err();
    assert!(matches!(err, NgseedError::UnknownLibrary { .. }));
}

#[test]
fn plan_applies_to_filesystem() {
    let temp = TempDir::new().unwrap();
    let selection = SelectionState::new("shop", CssFramework::SassBootstrap)
        .with_library(JsLibrary::AngularAnimate);
    let plan = GenerationPlan::build(&selection).unwrap();
    let mut scaffolder = FsScaffolder::new(temp.path());
    let mut ui = MockUI::new();

    plan.apply(&mut scaffolder, &mut ui).unwrap();

    for file in plan.files() {
        assert!(temp.path().join(file).is_file(), "{file} missing");
    }
    let main_js = std::fs::read_to_string(temp.path().join("app/scripts/main.js")).unwrap();
    assert!(main_js.contains("ngAnimate"));
}

#[test]
fn plan_output_matches_direct_rendering() {
    let selection = SelectionState::new("shop", CssFramework::Compass);
    let plan = GenerationPlan::build(&selection).unwrap();

    let Some(Operation::Write { contents, .. }) = plan.get("Gruntfile.js") else {
        panic!("Gruntfile.js should be rendered");
    };
    assert_eq!(contents, &render_template("Gruntfile.js", &selection).unwrap());
}

#[test]
fn scaffolder_renders_named_templates() {
    let selection = SelectionState::new("shop", CssFramework::NativeBootstrap);
    let mut scaffolder = RecordingScaffolder::new();

    scaffolder
        .render_template("index.html", "app/index.html", &selection)
        .unwrap();

    let html = scaffolder.written("app/index.html").unwrap();
    assert!(html.contains("<title>shop</title>"));
}
