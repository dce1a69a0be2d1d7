//! # plmserver - Serveur web haut niveau basé sur Axum
//!
//! Cette crate fournit une abstraction simple pour exposer le lecteur de
//! playlist en HTTP.
//!
//! ## Fonctionnalités
//!
//! - **API de haut niveau** : interface simple au-dessus d'Axum
//! - **Logs en temps réel** : buffer circulaire exposé en SSE (`/log-sse`)
//! - **Documentation OpenAPI** : Swagger UI par API montée
//! - **Arrêt gracieux** : gestion propre de Ctrl+C
//!
//! ## Architecture
//!
//! - [`server`] : le serveur principal et son builder
//! - [`logs`] : initialisation de `tracing` et routes de consultation des logs
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use plmserver::{ServerBuilder, logs::LoggingOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut server = ServerBuilder::new("MyServer", "localhost", 8080).build();
//!     server.init_logging(LoggingOptions::default()).await;
//!
//!     server.add_route("/api/status", || async {
//!         serde_json::json!({"status": "ok"})
//!     }).await;
//!
//!     server.start().await?;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

pub mod logs;
pub mod server;

pub use logs::{LogState, LoggingOptions, SseLayer, log_dump, log_sse};
pub use server::{Server, ServerBuilder, ServerInfo};
