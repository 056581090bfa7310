mod ajc;
mod ci;
mod config;
mod init;
mod post_compile;

pub use ajc::AjcArgs;
pub use ajc::handle_ajc;
pub use ci::CiArgs;
pub use ci::handle_ci;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;
pub use post_compile::PostCompileArgs;
pub use post_compile::handle_post_compile;
