pub const NOISE_INTENSITY: f64 = 0.05;

/// `random` yields values in `[0, 1)`.
pub fn fill_noise(data: &mut [u8], mut random: impl FnMut() -> f64) {
    for pixel in data.chunks_exact_mut(4) {
        let value = (random() * 255.0 * NOISE_INTENSITY) as u8;
        pixel[0] = value;
        pixel[1] = value;
        pixel[2] = value;
        pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_are_grey_faint_and_opaque() {
        let mut samples = [0.0, 0.5, 0.999].into_iter().cycle();
        let mut data = vec![7u8; 4 * 6];
        fill_noise(&mut data, || samples.next().unwrap());

        for pixel in data.chunks_exact(4) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
            assert!(pixel[0] <= 12);
            assert_eq!(pixel[3], 255);
        }
        assert_eq!(data[4], 6);
    }
}
