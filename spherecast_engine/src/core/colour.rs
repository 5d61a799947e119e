use crate::core::types::Channel;
use std::array;
use std::ops::{Deref, Index};

/// A colour with `N` 8-bit channels. Colours are only ever copied around by the renderer, never blended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)] // Ensure it's treated as a raw array, so a slice of colours is a slice of bytes
pub struct Colour<const N: usize>(pub [Channel; N]);

pub type ColourRgb = Colour<3>;

impl<const N: usize> Colour<N> {
    /// How many channels there are, for this colour.
    /// RGB is 3 channels.
    pub const CHANNEL_COUNT: usize = N;
}

impl<const N: usize> Default for Colour<N> {
    fn default() -> Self { Self::BLACK }
}

// region Constructors

impl<const N: usize> Colour<N> {
    pub const fn new(val: [Channel; N]) -> Self { Self(val) }
}

// endregion Constructors

// region RGB Impl

impl ColourRgb {
    pub const fn r(&self) -> Channel { self.0[0] }
    pub const fn g(&self) -> Channel { self.0[1] }
    pub const fn b(&self) -> Channel { self.0[2] }
}

impl From<(Channel, Channel, Channel)> for ColourRgb {
    fn from((r, g, b): (Channel, Channel, Channel)) -> Self { Self::new([r, g, b]) }
}
impl From<ColourRgb> for (Channel, Channel, Channel) {
    fn from(Colour([r, g, b]): ColourRgb) -> Self { (r, g, b) }
}

// endregion RGB Impl

// region Known Colours

impl<const N: usize> Colour<N> {
    pub const BLACK: Self = Self::new([Channel::MIN; N]);
    pub const WHITE: Self = Self::new([Channel::MAX; N]);
}

impl ColourRgb {
    pub const RED: Self = Self::new([Channel::MAX, 0, 0]);
    pub const GREEN: Self = Self::new([0, Channel::MAX, 0]);
    pub const BLUE: Self = Self::new([0, 0, Channel::MAX]);
}

// endregion Known Colours

// region To/From impls

impl<const N: usize> From<[Channel; N]> for Colour<N> {
    fn from(val: [Channel; N]) -> Self { Self::new(val) }
}
impl<const N: usize> From<Colour<N>> for [Channel; N] {
    fn from(Colour(val): Colour<N>) -> Self { val }
}

// endregion To/From impls

// region Iterating/Indexing

impl<const N: usize> IntoIterator for Colour<N> {
    type Item = Channel;
    type IntoIter = array::IntoIter<Channel, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<const N: usize> Deref for Colour<N> {
    type Target = [Channel; N];

    fn deref(&self) -> &Self::Target { &self.0 }
}
impl<const N: usize> Index<usize> for Colour<N> {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

// endregion Iterating/Indexing

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_colours() {
        assert_eq!(ColourRgb::BLACK, ColourRgb::new([0, 0, 0]));
        assert_eq!(ColourRgb::WHITE, ColourRgb::new([255, 255, 255]));
        assert_eq!(ColourRgb::default(), ColourRgb::BLACK);
    }

    #[test]
    fn channel_accessors() {
        let col = ColourRgb::from((12, 34, 56));
        assert_eq!((col.r(), col.g(), col.b()), (12, 34, 56));
        assert_eq!(col[1], 34);
        assert_eq!(col.len(), ColourRgb::CHANNEL_COUNT);
        assert_eq!(col.into_iter().collect::<Vec<_>>(), vec![12, 34, 56]);
        assert_eq!(<(Channel, Channel, Channel)>::from(col), (12, 34, 56));
    }
}
