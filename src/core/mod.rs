pub mod game;
pub mod renderer;  // Renderer injection trait
pub mod terminal;  // Output context wrapper
