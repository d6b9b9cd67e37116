//! Escape-time Mandelbrot renderer producing rows of ASCII density characters.

/// Characters from sparse to dense; the last one marks points that never escaped.
pub const DENSITY: [char; 8] = [' ', '.', ',', ';', '!', '*', '#', '@'];

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// The region of the complex plane sampled onto a character grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
    pub max_iterations: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 70,
            height: 25,
            re_min: -2.0,
            re_max: 1.0,
            im_min: -1.0,
            im_max: 1.0,
            max_iterations: 30,
        }
    }
}

impl Viewport {
    fn point(&self, column: usize, row: usize) -> (f64, f64) {
        let re = self.re_min + (self.re_max - self.re_min) * column as f64 / span(self.width);
        let im = self.im_min + (self.im_max - self.im_min) * row as f64 / span(self.height);
        (re, im)
    }
}

fn span(cells: usize) -> f64 {
    cells.saturating_sub(1).max(1) as f64
}

/// Index of the iteration at which `z` left the escape radius, or
/// `max_iterations - 1` if it stayed bounded.
pub fn escape_iteration(re: f64, im: f64, max_iterations: usize) -> usize {
    let (mut z_re, mut z_im) = (0.0_f64, 0.0_f64);
    for iteration in 0..max_iterations {
        let next_re = z_re * z_re - z_im * z_im + re;
        z_im = 2.0 * z_re * z_im + im;
        z_re = next_re;
        if z_re * z_re + z_im * z_im > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }
    max_iterations.saturating_sub(1)
}

pub fn density_char(iteration: usize, max_iterations: usize) -> char {
    if max_iterations == 0 || iteration + 1 >= max_iterations {
        return DENSITY[DENSITY.len() - 1];
    }
    DENSITY[iteration * DENSITY.len() / max_iterations]
}

pub fn render(viewport: &Viewport) -> Vec<String> {
    (0..viewport.height)
        .map(|row| {
            (0..viewport.width)
                .map(|column| {
                    let (re, im) = viewport.point(column, row);
                    let iteration = escape_iteration(re, im, viewport.max_iterations);
                    density_char(iteration, viewport.max_iterations)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_grid_dimensions() {
        let rows = render(&Viewport::default());
        assert_eq!(rows.len(), 25);
        assert!(rows.iter().all(|row| row.chars().count() == 70));
    }

    #[test]
    fn origin_is_inside_the_set() {
        let rows = render(&Viewport::default());
        assert_eq!(rows[12].chars().nth(46), Some('@'));
    }

    #[test]
    fn far_corner_escapes_immediately() {
        let rows = render(&Viewport::default());
        assert_eq!(rows[0].chars().next(), Some(' '));
        assert_eq!(escape_iteration(-2.0, -1.0, 30), 0);
    }

    #[rstest]
    #[case(0, ' ')]
    #[case(3, ' ')]
    #[case(4, '.')]
    #[case(8, ',')]
    #[case(15, '!')]
    #[case(28, '@')]
    #[case(29, '@')]
    fn density_buckets(#[case] iteration: usize, #[case] expected: char) {
        assert_eq!(density_char(iteration, 30), expected);
    }
}
