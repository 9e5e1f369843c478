use anyhow::Result;
use propass_password::{
    seeded_rng, CharacterCategory, LetterCategory, PhonemeLibrary, Sampler,
    Weighting,
};

#[test]
fn sampler_unweighted_single_draw() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let sampler = Sampler::new(&library, Weighting::Unweighted);
    let mut rng = seeded_rng(Some(21));
    for category in LetterCategory::ALL {
        for _ in 0..500 {
            let draw = sampler.draw(&mut rng, category);
            assert_eq!(1, draw.attempts);
            assert!(library
                .letters(category)
                .iter()
                .any(|l| l.value() == draw.value));
        }
    }
    Ok(())
}

#[test]
fn sampler_weighted_rejects_rare() -> Result<()> {
    let library = PhonemeLibrary::from_json(
        r#"{
            "singleConsonants": [{ "char": "k", "weight": 1 }],
            "doubleConsonants": [{ "char": "th", "weight": 1 }],
            "singleVowels": [
                { "char": "a", "weight": 1 },
                { "char": "e", "weight": 20 }
            ],
            "doubleVowels": [{ "char": "oo", "weight": 20 }],
            "numbers": ["7"],
            "symbols": ["!"]
        }"#,
    )?;
    let sampler = Sampler::new(&library, Weighting::Weighted);
    let mut rng = seeded_rng(Some(4));

    let mut common = 0;
    let mut rare = 0;
    for _ in 0..2000 {
        match sampler.letter(&mut rng, LetterCategory::SingleVowels) {
            "a" => common += 1,
            "e" => rare += 1,
            other => panic!("unexpected vowel {}", other),
        }
    }
    assert!(common > rare * 5, "common {} rare {}", common, rare);

    // Weight one is always accepted
    for _ in 0..100 {
        let draw = sampler.draw(&mut rng, LetterCategory::SingleConsonants);
        assert_eq!(1, draw.attempts);
    }

    // Weight twenty needs many attempts on average
    let attempts: usize = (0..200)
        .map(|_| sampler.draw(&mut rng, LetterCategory::DoubleVowels).attempts)
        .sum();
    assert!(attempts > 200 * 5);
    Ok(())
}

#[test]
fn sampler_unweighted_ignores_weights() -> Result<()> {
    let library = PhonemeLibrary::from_json(
        r#"{
            "singleConsonants": [{ "char": "k", "weight": 20 }],
            "doubleConsonants": [{ "char": "th", "weight": 20 }],
            "singleVowels": [
                { "char": "a", "weight": 1 },
                { "char": "e", "weight": 20 }
            ],
            "doubleVowels": [{ "char": "oo", "weight": 20 }],
            "numbers": ["7"],
            "symbols": ["!"]
        }"#,
    )?;
    let sampler = Sampler::new(&library, Weighting::Unweighted);
    let mut rng = seeded_rng(Some(8));
    let rare = (0..2000)
        .filter(|_| {
            sampler.letter(&mut rng, LetterCategory::SingleVowels) == "e"
        })
        .count();
    assert!(rare > 800 && rare < 1200, "rare {}", rare);
    Ok(())
}

#[test]
fn sampler_characters() -> Result<()> {
    let library = PhonemeLibrary::builtin()?;
    let sampler = Sampler::new(&library, Weighting::Weighted);
    let mut rng = seeded_rng(Some(17));
    for category in [CharacterCategory::Numbers, CharacterCategory::Symbols] {
        for _ in 0..200 {
            let value = sampler.character(&mut rng, category);
            assert!(library
                .characters(category)
                .iter()
                .any(|c| c == value));
        }
    }
    Ok(())
}
