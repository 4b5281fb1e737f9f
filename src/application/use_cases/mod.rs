/// Use cases module containing application business logic orchestration
mod render_tree;
mod resolve_dependencies;

pub use render_tree::RenderTreeUseCase;
pub use resolve_dependencies::ResolveDependenciesUseCase;
