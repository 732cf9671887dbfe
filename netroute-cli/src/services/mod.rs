// Business logic services layer
//
// Services that sit on top of the repository layer and are shared by the
// command handlers.

pub mod summary;
