use anyhow::Result;
use propass_password::{
    seeded_rng, CharacterCategory, GenerationOptions, Generator,
    PhonemeLibrary,
};
use propass_unit_tests::{count_in, is_consonant, is_vowel};

fn option_grid() -> Result<Vec<GenerationOptions>> {
    let mut grid = Vec::new();
    for (length, numbers, symbols) in [
        (10, 0, 0),
        (13, 2, 1),
        (16, 4, 4),
        (20, 10, 10),
        (64, 3, 5),
        (128, 0, 12),
        (128, 40, 0),
    ] {
        for mix in [false, true] {
            grid.push(
                GenerationOptions::new(length, numbers, symbols, 25)?
                    .mix(mix),
            );
        }
    }
    Ok(grid)
}

#[test]
fn generate_line_count() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let mut rng = seeded_rng(Some(1));
    for count in [1, 3, 250] {
        let options = GenerationOptions::new(13, 2, 1, count)?;
        let output = Generator::new(&library, options).generate(&mut rng);
        assert_eq!(count, output.lines().count());
        assert_eq!(count, output.matches('\n').count());
        assert!(output.ends_with('\n'));
    }
    Ok(())
}

#[test]
fn generate_affix_counts() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let mut rng = seeded_rng(Some(2));
    for options in option_grid()? {
        let generator = Generator::new(&library, options);
        for password in generator.many(&mut rng) {
            assert_eq!(
                options.number_count(),
                count_in(&library, CharacterCategory::Numbers, &password)
            );
            assert_eq!(
                options.symbol_count(),
                count_in(&library, CharacterCategory::Symbols, &password)
            );

            let len = password.chars().count();
            let total = options.total_length();
            assert!(len == total || len == total + 1, "{}", password);
        }
    }
    Ok(())
}

#[test]
fn generate_unmixed_order() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let options = GenerationOptions::new(20, 3, 2, 50)?;
    let mut rng = seeded_rng(Some(3));
    for password in Generator::new(&library, options).many(&mut rng) {
        let chars: Vec<char> = password.chars().collect();
        let (body, affixes) = chars.split_at(chars.len() - 5);
        assert!(body.iter().all(|c| c.is_alphabetic()));
        assert!(affixes[..2].iter().all(|c| !c.is_alphanumeric()));
        assert!(affixes[2..].iter().all(|c| c.is_ascii_digit()));
    }
    Ok(())
}

#[test]
fn generate_deterministic_with_seed() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    for options in option_grid()? {
        let options = options.caps(true);
        let generator = Generator::new(&library, options);
        let first = generator.generate(&mut seeded_rng(Some(1234)));
        let second = generator.generate(&mut seeded_rng(Some(1234)));
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn generate_mix_is_permutation() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    for seed in 0..50 {
        let options = GenerationOptions::new(24, 4, 4, 1)?;
        let plain = Generator::new(&library, options)
            .one(&mut seeded_rng(Some(seed)));
        let mixed = Generator::new(&library, options.mix(true))
            .one(&mut seeded_rng(Some(seed)));

        let mut a: Vec<char> = plain.chars().collect();
        let mut b: Vec<char> = mixed.chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn generate_mix_keeps_segments() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let options = GenerationOptions::new(30, 5, 5, 1)?.mix(true);
    let generator = Generator::new(&library, options);
    let parts = generator.parts(&mut seeded_rng(Some(77)));
    let affixes = parts
        .parts()
        .iter()
        .filter(|p| !p.chars().all(|c| c.is_alphabetic()))
        .count();
    assert_eq!(10, affixes);
    assert_eq!(parts.join().chars().count(), parts.body_len() + 10);
    Ok(())
}

#[test]
fn generate_caps() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let options = GenerationOptions::new(40, 0, 0, 1)?.caps(true);
    let generator = Generator::new(&library, options);
    let mut rng = seeded_rng(Some(5));
    for _ in 0..50 {
        let parts = generator.parts(&mut rng);
        for part in parts.parts() {
            let chars: Vec<char> = part.chars().collect();
            for (index, c) in chars.iter().enumerate() {
                if is_vowel(*c) {
                    assert!(c.is_lowercase(), "{}", part);
                } else if is_consonant(*c) && c.is_lowercase() {
                    // Second letter of a capitalized cluster
                    assert!(index > 0, "{}", part);
                    let previous = chars[index - 1];
                    assert!(
                        is_consonant(previous) && previous.is_uppercase(),
                        "{}",
                        part
                    );
                }
            }
            if chars.iter().any(|c| is_consonant(*c)) {
                assert!(chars.iter().any(|c| c.is_uppercase()), "{}", part);
            }
        }
    }
    Ok(())
}

#[test]
fn generate_no_caps() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let options = GenerationOptions::new(40, 2, 2, 100)?.mix(true);
    let mut rng = seeded_rng(Some(6));
    for password in Generator::new(&library, options).many(&mut rng) {
        assert!(!password.chars().any(|c| c.is_uppercase()));
    }
    Ok(())
}

#[test]
fn generate_example() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let options = GenerationOptions::new(13, 2, 1, 1)?;
    let output =
        Generator::new(&library, options).generate(&mut seeded_rng(None));
    assert_eq!(1, output.lines().count());
    assert!(output.ends_with('\n'));
    let line = output.trim_end_matches('\n');
    assert_eq!(13, line.chars().count());
    Ok(())
}

#[test]
fn generate_precedence_fixed_per_password() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let options = GenerationOptions::new(60, 0, 0, 1)?;
    let generator = Generator::new(&library, options);
    let mut rng = seeded_rng(Some(60));
    let mut seen = Vec::new();
    for _ in 0..200 {
        let parts = generator.parts(&mut rng);
        let mut consonant_first = None;
        for segment in parts.parts() {
            let chars: Vec<char> = segment.chars().collect();
            // Lone double vowels carry no order.
            if chars.len() != 2 || is_vowel(chars[0]) == is_vowel(chars[1])
            {
                continue;
            }
            let order = is_consonant(chars[0]);
            match consonant_first {
                None => consonant_first = Some(order),
                Some(expected) => assert_eq!(expected, order, "{:?}", parts),
            }
        }
        let order = consonant_first.expect("boundary segments");
        if !seen.contains(&order) {
            seen.push(order);
        }
    }
    // Both orders occur across passwords.
    assert_eq!(2, seen.len());
    Ok(())
}
