//! Integration tests for the locate-then-render pipeline.

use std::fs;

use renderview_engine::{
    MissingFieldPolicy, Model, RenderError, TemplateLocator, TemplateRenderer,
};
use tempfile::tempdir;

#[test]
fn test_locate_and_render_greeting() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("greet.tpl"), "Hello, {{name}}!").unwrap();

    let locator = TemplateLocator::new(temp.path());
    let renderer = TemplateRenderer::new();
    let model = Model::new().with_field("name", "User");

    let template = locator.locate("greet.tpl").unwrap();
    let output = renderer.render(&template, &model).unwrap();

    assert_eq!(output, "Hello, User!");
}

#[test]
fn test_pipeline_is_deterministic() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("report.tpl"),
        "{{a}} + {{b}} = {{a}}{{b}}\n",
    )
    .unwrap();

    let locator = TemplateLocator::new(temp.path());
    let renderer = TemplateRenderer::new();
    let model = Model::new().with_field("a", 1).with_field("b", 2);

    let first = renderer
        .render(&locator.locate("report.tpl").unwrap(), &model)
        .unwrap();
    assert_eq!(first, "1 + 2 = 12\n");

    for _ in 0..5 {
        let again = renderer
            .render(&locator.locate("report.tpl").unwrap(), &model)
            .unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_placeholder_free_template_round_trips() {
    let temp = tempdir().unwrap();
    let body = "Dear reader,\n\nnothing to substitute here.\n";
    fs::write(temp.path().join("static.tpl"), body).unwrap();

    let locator = TemplateLocator::new(temp.path());
    let renderer = TemplateRenderer::new();

    let rendered = renderer
        .render(&locator.locate("static.tpl").unwrap(), &Model::new())
        .unwrap();
    assert_eq!(rendered, body);

    // rendering the rendered output again is a no-op
    let again = renderer.render(&rendered, &Model::new()).unwrap();
    assert_eq!(again, body);
}

#[test]
fn test_traversal_never_leaks_content() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("outside.txt"), "leaked").unwrap();
    let root = temp.path().join("templates");
    fs::create_dir(&root).unwrap();

    let locator = TemplateLocator::new(&root);
    let err = locator.locate("../outside.txt").unwrap_err();
    assert!(matches!(err, RenderError::InvalidReference(_)));
}

#[test]
fn test_missing_template_is_not_found() {
    let temp = tempdir().unwrap();
    let locator = TemplateLocator::new(temp.path());

    let err = locator.locate("views/absent.tpl").unwrap_err();
    assert!(matches!(err, RenderError::NotFound(_)));
}

#[test]
fn test_missing_field_strict_by_default() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("hole.tpl"), "Value: {{missing}}").unwrap();

    let locator = TemplateLocator::new(temp.path());
    let template = locator.locate("hole.tpl").unwrap();

    let err = TemplateRenderer::new()
        .render(&template, &Model::new())
        .unwrap_err();
    assert!(matches!(err, RenderError::UnknownField(_)));

    let lenient = TemplateRenderer::with_policy(MissingFieldPolicy::Lenient)
        .render(&template, &Model::new())
        .unwrap();
    assert_eq!(lenient, "Value: ");
}

#[test]
fn test_email_template_end_to_end() {
    let temp = tempdir().unwrap();
    let views = temp.path().join("views");
    fs::create_dir(&views).unwrap();
    let template = "Hello {{user_name}},\n\n\
                    {{sender_name}} has sent you the latest data:\n\n\
                        Data 1: {{user_data1}}\n\
                        Data 2: {{user_data2}}\n\n\
                    Thanks,\n\
                    {{sender_name}}\n";
    fs::write(views.join("email_template.tpl"), template).unwrap();

    let locator = TemplateLocator::new(temp.path());
    let renderer = TemplateRenderer::new();
    let model = Model::new()
        .with_field("user_name", "User")
        .with_field("sender_name", "Sender")
        .with_field("user_data1", 1)
        .with_field("user_data2", 2);

    let output = renderer
        .render(&locator.locate("views/email_template.tpl").unwrap(), &model)
        .unwrap();

    assert!(output.starts_with("Hello User,\n"));
    assert!(output.contains("Sender has sent you the latest data:"));
    assert!(output.contains("Data 1: 1"));
    assert!(output.contains("Data 2: 2"));
    assert!(output.ends_with("Thanks,\nSender\n"));
}

#[test]
fn test_model_from_yaml_pipeline() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("badge.tpl"), "{{user.name}} ({{user.id}})").unwrap();

    let locator = TemplateLocator::new(temp.path());
    let model = Model::from_yaml_str("user:\n  name: User\n  id: 7\n").unwrap();

    let output = TemplateRenderer::new()
        .render(&locator.locate("badge.tpl").unwrap(), &model)
        .unwrap();
    assert_eq!(output, "User (7)");
}
