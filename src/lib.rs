// Core engine for cross-board peg solitaire. Rendering and input live in the
// adapters (console, bins); all rule enforcement goes through `game`.
pub mod board;
pub mod console;
pub mod game;
pub mod save;
