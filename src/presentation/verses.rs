use rand::Rng;
use rand::seq::SliceRandom;

pub const VERSES: [&str; 10] = [
    "Genesis 1:1 - In the beginning God created the heaven and the earth.",
    "John 1:1 - In the beginning was the Word, and the Word was with God, and the Word was God.",
    "Psalm 23:1 - The LORD is my shepherd; I shall not want.",
    "Matthew 5:3 - Blessed are the poor in spirit: for theirs is the kingdom of heaven.",
    "Romans 3:23 - For all have sinned, and come short of the glory of God.",
    "Romans 6:23 - For the wages of sin is death; but the gift of God is eternal life through Jesus Christ our Lord.",
    "John 3:16 - For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.",
    "Philippians 4:13 - I can do all things through Christ which strengtheneth me.",
    "Jeremiah 29:11 - For I know the thoughts that I think toward you, saith the LORD, thoughts of peace, and not of evil, to give you an expected end.",
    "Proverbs 3:5-6 - Trust in the LORD with all thine heart; and lean not unto thine own understanding. In all thy ways acknowledge him, and he shall direct thy paths.",
];

pub fn random_verse<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    VERSES.choose(rng).copied().unwrap_or(VERSES[0])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn random_verse_comes_from_the_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(VERSES.contains(&random_verse(&mut rng)));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        let a: Vec<_> = (0..10).map(|_| random_verse(&mut first)).collect();
        let b: Vec<_> = (0..10).map(|_| random_verse(&mut second)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn verses_are_single_lines() {
        assert!(VERSES.iter().all(|verse| !verse.contains('\n')));
    }
}
