mod detail;
mod list;

pub use detail::MovieRoute;
pub use list::MovieListRoute;
