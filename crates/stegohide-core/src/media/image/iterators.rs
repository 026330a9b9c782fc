//! The scan order shared by hiding and unveiling.
//!
//! Both directions walk the carrier pixel by pixel, row by row from the top
//! left, and inside each pixel channel by channel in storage order, alpha
//! included. Any change here changes the hidden data format.

use std::slice::{Iter, IterMut};

use crate::media::PixelBuffer;

/// read only iteration over all color channels in scan order
pub(crate) struct ColorIter<'a> {
    colors: Iter<'a, u8>,
}

impl<'a> ColorIter<'a> {
    pub fn new(carrier: &'a PixelBuffer) -> Self {
        Self {
            colors: carrier.as_raw().iter(),
        }
    }
}

impl<'a> Iterator for ColorIter<'a> {
    type Item = &'a u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.colors.size_hint()
    }
}

impl ExactSizeIterator for ColorIter<'_> {}

/// mutable iteration over all color channels in scan order
pub(crate) struct ColorIterMut<'a> {
    colors: IterMut<'a, u8>,
}

impl<'a> ColorIterMut<'a> {
    pub fn new(carrier: &'a mut PixelBuffer) -> Self {
        Self {
            colors: carrier.as_raw_mut().iter_mut(),
        }
    }
}

impl<'a> Iterator for ColorIterMut<'a> {
    type Item = &'a mut u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.colors.size_hint()
    }
}

impl ExactSizeIterator for ColorIterMut<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_4x4_rgb_image, prepare_5x5_rgba_image};

    #[test]
    fn should_walk_rows_first_then_columns_then_channels() {
        let img = prepare_5x5_rgba_image();
        let (width, height) = img.dimensions();
        let mut color_iter = ColorIter::new(&img);

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img.pixel(x, y).unwrap();
                for (color_idx, expected_color) in expected_pixel.iter().enumerate() {
                    let given_color = color_iter.next().unwrap_or_else(|| {
                        panic!("Color {color_idx} at ({x}, {y}) was not even existing!")
                    });
                    assert_eq!(
                        given_color, expected_color,
                        "Color {color_idx} at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(color_iter.next().is_none());
    }

    #[test]
    fn should_visit_the_same_channels_in_both_directions() {
        let mut img = prepare_4x4_rgb_image();
        let read_only: Vec<u8> = ColorIter::new(&img).copied().collect();
        let mutable: Vec<u8> = ColorIterMut::new(&mut img).map(|c| *c).collect();

        assert_eq!(read_only, mutable);
        assert_eq!(read_only.len(), 48);
    }

    #[test]
    fn should_include_the_alpha_channel() {
        let img = prepare_5x5_rgba_image();
        let colors = ColorIter::new(&img);
        assert_eq!(colors.len(), 5 * 5 * 4);
    }

    #[test]
    fn should_be_possible_to_mutate_colors() {
        let mut img = prepare_4x4_rgb_image();
        let first_pixel = img.pixel(0, 0).unwrap().to_vec();
        {
            let mut colors = ColorIterMut::new(&mut img);
            if let Some(red) = colors.next() {
                *red += 0x2;
            }
        }
        let changed = img.pixel(0, 0).unwrap();
        assert_ne!(
            first_pixel[0], changed[0],
            "First Color (Red-Channel) should have been changed."
        );
        assert_eq!(
            first_pixel[1], changed[1],
            "Second Color (Green-Channel) should be equal."
        );
    }
}
