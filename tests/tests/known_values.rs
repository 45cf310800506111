//! Published check values for every scheme family

use checkdigit_algorithms::alphabet;
use checkdigit_algorithms::{
    catalog, Checker, CheckerExt, Error, FieldError, FieldScheme, FoldScheme, Iso7064Hybrid,
    Iso7064Pure, SchemeConfig,
};

#[test]
fn base32check1_values() {
    let scheme = FieldScheme::base32check1().unwrap();
    assert_eq!(scheme.compute("").unwrap(), "A");
    assert_eq!(scheme.compute("A").unwrap(), "A");
    assert_eq!(scheme.compute("B").unwrap(), "Q");
    assert!(scheme.validate("BQ").unwrap());
}

#[test]
fn base32check2_values() {
    let scheme = FieldScheme::base32check2().unwrap();
    assert_eq!(scheme.check_value("B").unwrap(), 919);
    assert_eq!(scheme.compute("B").unwrap(), "4X");
    assert_eq!(scheme.compute("").unwrap(), "AA");
}

#[test]
fn fold_values() {
    let scheme = FoldScheme::base32check_fold().unwrap();
    let digest = scheme.digest("B").unwrap();
    assert_eq!(digest.code1, 16);
    assert_eq!(scheme.fold("B").unwrap(), 960);

    let empty = scheme.digest("").unwrap();
    assert_eq!((empty.code1, empty.code2, empty.parity, empty.fold), (0, 0, 0, 1));

    assert_eq!(scheme.compute(&"A".repeat(31)).unwrap(), "AB");
}

#[test]
fn fold_rejects_nonzero_sum_at_length_thirty_one() {
    let scheme = FoldScheme::base32check_fold().unwrap();
    let payload = format!("{}B", "A".repeat(30));
    assert_eq!(
        scheme.compute(&payload).unwrap_err(),
        Error::Field(FieldError::OutOfRange {
            operand: 31,
            cardinality: 32
        })
    );
}

#[test]
fn iso7064_hybrid_base16() {
    let scheme = Iso7064Hybrid::new(alphabet::base16().clone()).unwrap();
    assert_eq!(scheme.compute("D98989898909898").unwrap(), "B");
    for c in alphabet::base16().characters() {
        let full = format!("D98989898909898{c}");
        assert_eq!(scheme.validate(&full).unwrap(), *c == 'B', "{full}");
    }
}

#[test]
fn iso7064_small_moduli() {
    let hybrid = Iso7064Hybrid::new(alphabet::base10().clone()).unwrap();
    assert_eq!(hybrid.compute("079").unwrap(), "2");

    let pure = Iso7064Pure::new(alphabet::base10().clone(), 97).unwrap();
    assert_eq!(pure.compute("794").unwrap(), "44");
}

#[test]
fn catalog_values() {
    assert_eq!(catalog::build("mod1007-32").unwrap().compute("").unwrap(), "AB");
    assert_eq!(catalog::build("base32check1").unwrap().compute("B").unwrap(), "Q");
}

#[test]
fn scheme_config_from_json() {
    let json = r#"{
        "label": "gf32-alt",
        "field": { "kind": "binary", "polynomial": 41 },
        "digit_count": 1,
        "alphabet": "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"
    }"#;
    let config: SchemeConfig = serde_json::from_str(json).unwrap();
    let scheme = FieldScheme::new(config).unwrap();
    assert_eq!(scheme.name(), "gf32-alt");
    let full = scheme.append_check("HELLOWORLD").unwrap();
    assert!(scheme.validate(&full).unwrap());

    let round = serde_json::to_string(&SchemeConfig::base32check2()).unwrap();
    let back: SchemeConfig = serde_json::from_str(&round).unwrap();
    assert_eq!(back, SchemeConfig::base32check2());
}
