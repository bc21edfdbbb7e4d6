use crate::{
  cache::CacheSupervisor,
  config::{StartupOptions, ViewPortConfig},
  lookup::LookupTable,
  root::TreeShape,
  supervision::ChildSpec,
  viewport::{DynamicViewPortSupervisor, StaticViewPortSupervisor, ViewPortEnv},
};

fn viewport(name: &str) -> ViewPortConfig {
  ViewPortConfig::builder(name).size(100, 100).build().expect("valid config")
}

fn ids(specs: &[ChildSpec]) -> Vec<&str> {
  specs.iter().map(|spec| spec.id().as_str()).collect()
}

#[test]
fn empty_viewports_give_minimal_shape() {
  let shape = TreeShape::from_viewports(&[]);

  assert_eq!(TreeShape::Minimal, shape);
  assert_eq!(3, shape.child_count());
  assert!(!shape.has_static());
  assert!(shape.viewports().is_empty());
}

#[test]
fn viewports_give_static_shape_in_order() {
  let shape = TreeShape::from_viewports(&[viewport("a"), viewport("b")]);

  assert_eq!(4, shape.child_count());
  assert!(shape.has_static());
  let names: Vec<&str> = shape.viewports().iter().map(|config| config.name().as_str()).collect();
  assert_eq!(vec!["a", "b"], names);
}

#[test]
fn minimal_shape_renders_three_children_in_start_order() {
  let options = StartupOptions::default();
  let env = ViewPortEnv::from_options(&options);

  let specs = TreeShape::Minimal.child_specs(&options, &env).expect("specs");

  assert_eq!(vec![LookupTable::CHILD_ID, CacheSupervisor::CHILD_ID, DynamicViewPortSupervisor::CHILD_ID], ids(&specs));
}

#[test]
fn static_shape_inserts_static_pool_before_dynamic_pool() {
  let options = StartupOptions::builder().viewport(viewport("a")).build();
  let env = ViewPortEnv::from_options(&options);

  let specs = TreeShape::from_viewports(options.viewports()).child_specs(&options, &env).expect("specs");

  assert_eq!(
    vec![
      LookupTable::CHILD_ID,
      CacheSupervisor::CHILD_ID,
      StaticViewPortSupervisor::CHILD_ID,
      DynamicViewPortSupervisor::CHILD_ID
    ],
    ids(&specs)
  );
  assert!(specs.iter().all(|spec| spec.name().is_some()));
}
