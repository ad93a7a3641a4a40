mod model_manager;

pub use model_manager::ModelManager;
