//! Tests for RoleCollator

use std::cmp::Ordering;

use rstest::rstest;

use orgtree::domain::{CollationLocale, RoleCollator};

fn sorted(collator: &RoleCollator, roles: &[&str]) -> Vec<String> {
    let mut out: Vec<_> = roles.iter().map(|r| r.to_string()).collect();
    out.sort_by(|a, b| collator.compare(Some(a.as_str()), Some(b.as_str())));
    out
}

#[test]
fn given_default_collator_when_created_then_uses_turkish() {
    assert_eq!(RoleCollator::default().locale(), CollationLocale::Turkish);
}

// ============================================================
// Turkish
// ============================================================

#[rstest]
#[case::c_cedilla("c", "ç")]
#[case::cedilla_before_d("ç", "d")]
#[case::g_breve("g", "ğ")]
#[case::breve_before_h("ğ", "h")]
#[case::dotless_before_dotted("ı", "i")]
#[case::o_umlaut("o", "ö")]
#[case::s_cedilla("s", "ş")]
#[case::u_umlaut("u", "ü")]
fn given_turkish_letters_when_comparing_then_follow_alphabet(#[case] a: &str, #[case] b: &str) {
    let collator = RoleCollator::new("tr");
    assert_eq!(collator.compare(Some(a), Some(b)), Ordering::Less);
    assert_eq!(collator.compare(Some(b), Some(a)), Ordering::Greater);
}

#[rstest]
#[case::capital_i_is_dotless("I", "ı")]
#[case::dotted_capital_is_i("İ", "i")]
#[case::capital_cedilla("Ç", "ç")]
#[case::whole_word("ŞEF", "şef")]
fn given_turkish_case_pairs_when_comparing_then_equal(#[case] a: &str, #[case] b: &str) {
    let collator = RoleCollator::new("tr");
    assert_eq!(collator.compare(Some(a), Some(b)), Ordering::Equal);
}

#[test]
fn given_turkish_roles_when_sorting_then_orders_like_a_turkish_dictionary() {
    let collator = RoleCollator::new("tr");

    let roles = sorted(&collator, &["Uzman", "Çalışan", "Şef", "Müdür", "Direktör", "Cari"]);

    assert_eq!(roles, vec!["Cari", "Çalışan", "Direktör", "Müdür", "Şef", "Uzman"]);
}

// ============================================================
// Root
// ============================================================

#[rstest]
#[case::acute("é", "e")]
#[case::cedilla("Ç", "c")]
#[case::umlaut("Müller", "muller")]
fn given_root_locale_when_comparing_accents_then_ignored(#[case] a: &str, #[case] b: &str) {
    let collator = RoleCollator::new("en");
    assert_eq!(collator.compare(Some(a), Some(b)), Ordering::Equal);
}

#[test]
fn given_root_locale_when_sorting_then_accented_letters_sort_with_base() {
    let collator = RoleCollator::new("en");

    let roles = sorted(&collator, &["Şef", "Cari", "Çalışan", "Direktör"]);

    assert_eq!(roles, vec!["Çalışan", "Cari", "Direktör", "Şef"]);
}

// ============================================================
// Missing roles
// ============================================================

#[rstest]
#[case::turkish("tr")]
#[case::root("en")]
fn given_missing_role_when_comparing_then_equals_empty_and_sorts_first(#[case] locale: &str) {
    let collator = RoleCollator::new(locale);

    assert_eq!(collator.compare(None, Some("")), Ordering::Equal);
    assert_eq!(collator.compare(None, None), Ordering::Equal);
    assert_eq!(collator.compare(None, Some("a")), Ordering::Less);
    assert_eq!(collator.compare(Some("0"), None), Ordering::Greater);
}

// ============================================================
// Separators and punctuation
// ============================================================

#[rstest]
#[case::en_dash("Manager \u{2013} Sales", "Manager - Sales")]
#[case::curly_apostrophe("Director\u{2019}s Office", "Director's Office")]
#[case::thin_space("Team\u{2009}Lead", "Team Lead")]
#[case::ideographic_space("Team\u{3000}Lead", "Team Lead")]
fn given_typographic_variants_when_comparing_then_equal_to_ascii(
    #[case] a: &str,
    #[case] b: &str,
) {
    let collator = RoleCollator::new("tr");
    assert_eq!(collator.compare(Some(a), Some(b)), Ordering::Equal);
}

#[rstest]
#[case::thin_space("\u{2009}")]
#[case::narrow_no_break_space("\u{202F}")]
#[case::ideographic_space("\u{3000}")]
#[case::en_dash("\u{2013}")]
#[case::right_quote("\u{2019}")]
fn given_unicode_separator_when_comparing_then_sorts_before_digits_and_letters(
    #[case] separator: &str,
) {
    let collator = RoleCollator::new("tr");

    assert_eq!(collator.compare(Some(separator), Some("1")), Ordering::Less);
    assert_eq!(collator.compare(Some(separator), Some("a")), Ordering::Less);
}

#[test]
fn given_separator_inside_label_when_comparing_then_sorts_before_joined_label() {
    let collator = RoleCollator::new("tr");

    assert_eq!(collator.compare(Some("A\u{2013}B"), Some("AB")), Ordering::Less);
    assert_eq!(collator.compare(Some("A-B"), Some("AB")), Ordering::Less);
}
