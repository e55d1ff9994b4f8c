#![deny(missing_docs)]
//! This crate provides a standardized initialization process that every lambda binary should use.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use tracing_subscriber::EnvFilter;
use udagram_env::Environment;

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct UdagramEntrypoint {
    env: Environment,
}

impl Default for UdagramEntrypoint {
    fn default() -> Self {
        UdagramEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [UdagramEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl UdagramEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                // cloudwatch does not render ansi
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .without_time()
                    .init();
            }
        }

        tracing::trace!(environment = %self.env, "initialized entrypoint");

        InitializedEntrypoint(())
    }
}
