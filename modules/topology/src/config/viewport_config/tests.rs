use serde_json::json;

use crate::{
  config::{ConfigError, DriverConfig, SceneRef, ViewPortConfig, ViewPortSize},
  registry::RegisteredName,
};

#[test]
fn builder_populates_all_fields() {
  let config = ViewPortConfig::builder("main")
    .size(800, 600)
    .default_scene(SceneRef::new("home").with_args(json!({ "theme": "dark" })))
    .driver(DriverConfig::new("glfw", "window").with_opt("title", json!("demo")))
    .build()
    .expect("valid config");

  assert_eq!(&RegisteredName::new("main"), config.name());
  assert_eq!(ViewPortSize::new(800, 600), config.size());
  assert_eq!(Some("home"), config.default_scene().map(SceneRef::scene));
  assert_eq!(1, config.drivers().len());
  assert_eq!(Some(&json!("demo")), config.drivers()[0].opts().get("title"));
}

#[test]
fn missing_name_is_rejected() {
  let error = ViewPortConfig::builder("  ").size(10, 10).build().expect_err("blank name");

  assert_eq!(ConfigError::MissingName, error);
}

#[test]
fn non_positive_size_is_rejected() {
  let error = ViewPortConfig::builder("main").size(0, 600).build().expect_err("zero width");

  assert_eq!(ConfigError::InvalidSize { name: "main".into(), width: 0, height: 600 }, error);
}

#[test]
fn duplicate_driver_names_are_rejected() {
  let error = ViewPortConfig::builder("main")
    .size(10, 10)
    .driver(DriverConfig::new("glfw", "out"))
    .driver(DriverConfig::new("png", "out"))
    .build()
    .expect_err("duplicate driver");

  assert_eq!(ConfigError::DuplicateDriver { viewport: "main".into(), driver: String::from("out") }, error);
}

#[test]
fn deserialized_config_is_validated_separately() {
  let config: ViewPortConfig = serde_json::from_value(json!({
    "name": "side",
    "size": { "width": 0, "height": 0 },
    "drivers": [{ "module": "glfw", "name": "window" }]
  }))
  .expect("well-formed json");

  assert!(matches!(config.validate(), Err(ConfigError::InvalidSize { .. })));
  assert!(config.default_scene().is_none());
}
