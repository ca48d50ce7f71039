mod browse;

pub use browse::Browse;
