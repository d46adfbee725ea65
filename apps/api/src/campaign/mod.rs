// Campaign generation: request model, platform table, prompt templating,
// caption parsing and the /generate handler.
// All generation-service calls go through genai_client.

pub mod captions;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod platform;
pub mod prompts;
