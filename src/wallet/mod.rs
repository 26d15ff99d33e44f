pub mod local_registry;
