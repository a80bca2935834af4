//! smenv - Load AWS Secrets Manager secrets into CI job environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── fetch         # Load secrets into the environment
//! │   ├── cleanup       # Unset previously loaded secrets
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal and workflow command output
//! └── core/             # Core library components
//!     ├── config        # Input validation
//!     ├── transform     # Environment variable name derivation
//!     ├── reference     # `ALIAS,secret-id` parsing
//!     ├── lister        # Prefix expansion and de-duplication
//!     ├── fetcher       # Single secret retrieval
//!     ├── inject        # Naming, JSON flattening, writing
//!     ├── run           # Orchestration and run report
//!     ├── cleanup       # Post-job unset
//!     ├── client/       # Secrets store clients
//!     │   ├── aws       # AWS Secrets Manager
//!     │   └── memory    # In-memory store
//!     └── sink/         # Environment sinks
//!         ├── github    # $GITHUB_ENV file
//!         ├── process   # Process environment
//!         └── memory    # Recording sink
//! ```
//!
//! # Example
//!
//! ```
//! use smenv::core::client::MemoryClient;
//! use smenv::core::config::Config;
//! use smenv::core::run::run;
//! use smenv::core::sink::MemoryEnv;
//!
//! let client = MemoryClient::new().with_secret("prod/db", r#"{"user":"a","pass":"b"}"#);
//! let config = Config::from_inputs(&["DB,prod/db"], Some("true"), None).unwrap();
//! let mut env = MemoryEnv::new();
//!
//! let report = run(&client, &mut env, &config).unwrap();
//! assert_eq!(report.injected, vec!["DB_USER", "DB_PASS"]);
//! assert_eq!(env.get("DB_USER"), Some("a"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
