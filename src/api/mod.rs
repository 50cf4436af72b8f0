mod mock_shell_api;
mod real_shell_api;
mod shell_api;

pub use real_shell_api::RealShellApi;
pub use shell_api::ShellApi;

#[cfg(test)]
pub use mock_shell_api::test::MockShellApi;
