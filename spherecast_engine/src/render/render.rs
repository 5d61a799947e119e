use derivative::Derivative;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// How long the render took
    pub duration: Duration,
    /// How many pixels were rendered
    pub num_px: usize,
    /// How many threads were used in rendering
    pub num_threads: usize,
}

/// The result of a single render pass: the finished image and some stats about it
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Render<T> {
    #[derivative(Debug = "ignore")]
    pub img: T,
    pub stats: RenderStats,
}

impl<T> Render<T> {
    /// Converts the image of the render, keeping the stats
    pub fn map<U>(self, convert: impl FnOnce(T) -> U) -> Render<U> {
        Render {
            img: convert(self.img),
            stats: self.stats,
        }
    }
}
