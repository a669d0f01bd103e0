pub mod support;

mod item_flow_tests;
