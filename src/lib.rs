// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB and outbound HTTP adapters (Gemini, YouTube)
// - presentation: HTTP handlers and routing
// - application: use cases, ports and domain services
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
