use crate::conversion::Conversion;
use crate::table::TableError;
use crate::transliterate::{
    cyrillic_to_latin, latin_to_cyrillic, to_bold_latin, to_lower_bold_latin,
    to_upper_bold_latin, transliterate, Transliterator,
};

#[test]
fn test_cyrillic_digraph_letters() {
    assert_eq!(cyrillic_to_latin("Њ").as_deref(), Some("NJ"));
    assert_eq!(cyrillic_to_latin("њ").as_deref(), Some("nj"));
    assert_eq!(cyrillic_to_latin("Џ").as_deref(), Some("DŽ"));
    assert_eq!(cyrillic_to_latin("ђ").as_deref(), Some("đ"));
}

#[test]
fn test_cyrillic_sentence() {
    assert_eq!(
        cyrillic_to_latin("Ђорђе чита у Чачку.").as_deref(),
        Some("Đorđe čita u Čačku.")
    );
    // Capital digraph letters always spell both halves upper-case
    assert_eq!(cyrillic_to_latin("Љубав").as_deref(), Some("LJubav"));
}

#[test]
fn test_cyrillic_keeps_surrounding_whitespace() {
    assert_eq!(cyrillic_to_latin("  Шума\t").as_deref(), Some("  Šuma\t"));
}

#[test]
fn test_latin_and_bold_keep_surrounding_whitespace() {
    assert_eq!(latin_to_cyrillic("  Njiva ").as_deref(), Some("  Њива "));
    assert_eq!(to_bold_latin("  Шума\t").as_deref(), Some("  Suma\t"));
    assert_eq!(to_upper_bold_latin(" ćup ").as_deref(), Some(" CUP "));
}

#[test]
fn test_cyrillic_passes_latin_through() {
    assert_eq!(
        cyrillic_to_latin("Word и Excel").as_deref(),
        Some("Word i Excel")
    );
}

#[test]
fn test_latin_digraph_at_word_start() {
    assert_eq!(latin_to_cyrillic("DŽem").as_deref(), Some("Џем"));
    assert_eq!(latin_to_cyrillic("Njegov").as_deref(), Some("Његов"));
    assert_eq!(latin_to_cyrillic("Ljubav").as_deref(), Some("Љубав"));
    assert_eq!(latin_to_cyrillic("Djordje").as_deref(), Some("Ђорђе"));
}

#[test]
fn test_latin_digraph_inside_word() {
    assert_eq!(latin_to_cyrillic("konj").as_deref(), Some("коњ"));
    assert_eq!(latin_to_cyrillic("KONJ").as_deref(), Some("КОЊ"));
    assert_eq!(latin_to_cyrillic("ljlj").as_deref(), Some("љљ"));
    assert_eq!(latin_to_cyrillic("odžak").as_deref(), Some("оџак"));
}

#[test]
fn test_latin_digraph_has_no_morpheme_exceptions() {
    // "nad" + "živeti": the d/ž boundary still reads as one letter
    assert_eq!(latin_to_cyrillic("nadživeti").as_deref(), Some("наџивети"));
}

#[test]
fn test_latin_accented_letters() {
    assert_eq!(
        latin_to_cyrillic("Đak čita šćućurene žabe").as_deref(),
        Some("Ђак чита шћућурене жабе")
    );
}

#[test]
fn test_latin_passthrough() {
    assert_eq!(
        latin_to_cyrillic("Beograd 2024!").as_deref(),
        Some("Београд 2024!")
    );
    // Q, W, X, Y are not in the alphabet
    assert_eq!(latin_to_cyrillic("Wi-Fi").as_deref(), Some("Wи-Фи"));
    assert_eq!(latin_to_cyrillic("Шума").as_deref(), Some("Шума"));
}

#[test]
fn test_bold_from_cyrillic() {
    assert_eq!(to_bold_latin("Чачак").as_deref(), Some("Cacak"));
    assert_eq!(to_bold_latin("Џеп").as_deref(), Some("DZep"));
    assert_eq!(to_bold_latin("Ђурђевак").as_deref(), Some("DJurdjevak"));
}

#[test]
fn test_bold_from_accented_latin() {
    assert_eq!(
        to_bold_latin("Đorđe Čović").as_deref(),
        Some("DJordje Covic")
    );
    assert_eq!(to_bold_latin("plain ascii").as_deref(), Some("plain ascii"));
}

#[test]
fn test_bold_case_folds() {
    assert_eq!(to_lower_bold_latin("ŠUMA").as_deref(), Some("suma"));
    assert_eq!(to_upper_bold_latin("šuma").as_deref(), Some("SUMA"));
    assert_eq!(to_upper_bold_latin("Љиљана").as_deref(), Some("LJILJANA"));
    assert_eq!(to_lower_bold_latin("Љиљана").as_deref(), Some("ljiljana"));
}

#[test]
fn test_bold_case_folds_map_one_char_to_one() {
    assert_eq!(to_upper_bold_latin("Straße").as_deref(), Some("STRAßE"));
    assert_eq!(
        to_upper_bold_latin("Straße Шума").as_deref(),
        Some("STRAßE SUMA")
    );
    assert_eq!(
        to_lower_bold_latin("\u{0130}STANBUL").as_deref(),
        Some("istanbul")
    );
    let input = "ßİŉ Ђура";
    let bold = to_bold_latin(input).unwrap();
    for folded in [to_upper_bold_latin(input), to_lower_bold_latin(input)] {
        assert_eq!(folded.unwrap().chars().count(), bold.chars().count());
    }
}

#[test]
fn test_blank_input_is_absent() {
    for conversion in Conversion::ALL {
        assert_eq!(transliterate(conversion, ""), None, "{conversion}");
        assert_eq!(transliterate(conversion, "   "), None, "{conversion}");
        assert_eq!(transliterate(conversion, "\t\n "), None, "{conversion}");
        assert_eq!(transliterate(conversion, None::<&str>), None, "{conversion}");
    }
    assert_eq!(cyrillic_to_latin(""), None);
    assert_eq!(cyrillic_to_latin("   "), None);
}

#[test]
fn test_optional_input() {
    let present: Option<&str> = Some("ћ");
    assert_eq!(cyrillic_to_latin(present).as_deref(), Some("ć"));
    assert_eq!(to_bold_latin(None::<&str>), None);
}

#[test]
fn test_digraph_letters_roundtrip() {
    for c in ['Љ', 'Њ', 'Џ', 'Ђ', 'љ', 'њ', 'џ', 'ђ'] {
        let latin = cyrillic_to_latin(c.to_string().as_str()).unwrap();
        let back = latin_to_cyrillic(latin.as_str()).unwrap();
        assert_eq!(back, c.to_string(), "{c} via {latin}");
    }
}

#[test]
fn test_every_digraph_casing_maps_to_one_letter() {
    let t = Transliterator::global();
    for (latin, cyr) in t.tables().digraphs() {
        let out = t.latin_to_cyrillic(latin.as_str()).unwrap();
        assert_eq!(out, cyr.to_string(), "{latin}");
        let first_upper = latin.chars().next().is_some_and(char::is_uppercase);
        assert_eq!(cyr.is_uppercase(), first_upper, "{latin}");
    }
}

#[test]
fn test_digraphs_do_not_overlap() {
    let digraphs = Transliterator::global().tables().digraphs();
    let keys: Vec<Vec<char>> = digraphs.iter().map(|(k, _)| k.chars().collect()).collect();
    for a in &keys {
        for b in &keys {
            assert_ne!(a[1], b[0], "{a:?} runs into {b:?}");
        }
    }
    for (_, cyr) in &digraphs {
        assert!(keys.iter().all(|k| !k.contains(cyr)));
    }
}

#[test]
fn test_custom_tables() {
    let toml = r#"
[cyrillic_to_latin]
"ж" = "zh"

[bold_latin]
"ж" = "z"

[latin_digraphs]
"ZH" = "Ж"
"Zh" = "Ж"
"zH" = "ж"
"zh" = "ж"

[latin_to_cyrillic]
"a" = "а"
"#;
    let t = Transliterator::from_toml(toml).unwrap();
    assert_eq!(t.cyrillic_to_latin("жаба").as_deref(), Some("zhаба"));
    assert_eq!(t.latin_to_cyrillic("zhaba").as_deref(), Some("жаbа"));
    assert_eq!(t.apply(Conversion::UpperBoldLatin, "ж").as_deref(), Some("Z"));
}

#[test]
fn test_init_custom_after_global_fails() {
    let _ = Transliterator::global();
    let err = Transliterator::init_custom(crate::table::default_toml().to_string()).unwrap_err();
    assert!(matches!(err, TableError::AlreadyInitialized));
}

#[test]
fn test_init_custom_rejects_invalid_tables() {
    let err = Transliterator::init_custom("[cyrillic_to_latin]\n".to_string()).unwrap_err();
    assert!(matches!(err, TableError::Parse(_)));
}

#[test]
fn test_init_custom_racing_global_is_all_or_nothing() {
    // The default tables plus Macedonian Ѕ, so other tests see no change.
    let custom = crate::table::default_toml().replacen(
        "[cyrillic_to_latin]\n",
        "[cyrillic_to_latin]\n\"\u{0405}\" = \"DZ\"\n",
        1,
    );
    let installed = std::thread::scope(|s| {
        let readers: Vec<_> = (0..4)
            .map(|_| s.spawn(|| Transliterator::global().tables().stats()))
            .collect();
        let installed = Transliterator::init_custom(custom).is_ok();
        for r in readers {
            r.join().unwrap();
        }
        installed
    });
    let uses_custom = Transliterator::global()
        .tables()
        .cyrillic_to_latin('\u{0405}')
        .is_some();
    assert_eq!(installed, uses_custom);
}

#[test]
fn test_concurrent_use() {
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| latin_to_cyrillic("Njegoš i Džoni")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().as_deref(), Some("Његош и Џони"));
        }
    });
}
