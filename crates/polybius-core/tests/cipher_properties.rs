//! Properties both cipher engines must hold over whole messages.

use polybius_core::{
    BifidCipher, Cipher, CipherError, CipherKind, PolybiusCipher, Square, SquareLoader,
    SquareVariant,
};

const MESSAGES: &[&str] = &[
    "A",
    "HELLO",
    "FLEEATONCE",
    "DEFENDTHEEASTWALLOFTHECASTLE",
    "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG",
    "jackdaws",
];

fn keyed_square() -> Square {
    Square::from_layout("PHQGMEAYLNOFDXKRCVSZWBUTI", SquareVariant::Merged).unwrap()
}

fn strict_square() -> Square {
    Square::from_layout("ABCDEFGHIJLMNOPQRSTUVWXYZ", SquareVariant::Strict).unwrap()
}

#[test]
fn bifid_round_trip_restores_normalized_message() {
    for square in [Square::standard(), keyed_square()] {
        for message in MESSAGES {
            let ciphertext = BifidCipher.encrypt(message, &square).unwrap();
            let plaintext = BifidCipher.decrypt(&ciphertext, &square).unwrap();
            assert_eq!(plaintext, square.variant().normalize_text(message));
        }
    }
}

#[test]
fn polybius_round_trip_restores_normalized_message() {
    for square in [Square::standard(), keyed_square()] {
        for message in MESSAGES {
            let ciphertext = PolybiusCipher.encrypt(message, &square).unwrap();
            let plaintext = PolybiusCipher.decrypt(&ciphertext, &square).unwrap();
            assert_eq!(plaintext, square.variant().normalize_text(message));
        }
    }
}

#[test]
fn bifid_preserves_length() {
    let square = keyed_square();
    for message in MESSAGES {
        let n = message.chars().count();
        let ciphertext = BifidCipher.encrypt(message, &square).unwrap();
        assert_eq!(ciphertext.chars().count(), n);
        assert_eq!(BifidCipher.decrypt(&ciphertext, &square).unwrap().chars().count(), n);
    }
}

#[test]
fn polybius_doubles_length() {
    let square = Square::standard();
    for message in MESSAGES {
        let ciphertext = PolybiusCipher.encrypt(message, &square).unwrap();
        assert_eq!(ciphertext.len(), message.chars().count() * 2);
    }
}

#[test]
fn locate_is_deterministic() {
    let square = keyed_square();
    for symbol in "ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars() {
        assert_eq!(square.locate(symbol), square.locate(symbol));
        assert!(square.locate(symbol).is_some());
    }
}

#[test]
fn every_cell_is_found_at_its_own_coordinate() {
    let square = keyed_square();
    for row in square.to_rows() {
        for cell in row {
            let symbol = cell.chars().next().unwrap();
            let at = square.locate(symbol).unwrap();
            assert_eq!(square.symbol_at(at), symbol);
        }
    }
}

#[test]
fn keyed_square_known_vector() {
    // Rows 2,1,1,1,1 then columns 1,3,0,0,1 of F, L, E, E, A.
    let square = keyed_square();
    assert_eq!(BifidCipher.encrypt("FLEEA", &square).unwrap(), "FAARH");
    assert_eq!(BifidCipher.decrypt("FAARH", &square).unwrap(), "FLEEA");
}

#[test]
fn strict_square_distinguishes_i_and_j() {
    let square = strict_square();
    let with_j = BifidCipher.encrypt("JAM", &square).unwrap();
    let with_i = BifidCipher.encrypt("IAM", &square).unwrap();
    assert_ne!(with_j, with_i);
    assert_eq!(BifidCipher.decrypt(&with_j, &square).unwrap(), "JAM");
}

#[test]
fn odd_length_ciphertext_is_accepted() {
    let square = Square::standard();
    assert_eq!(BifidCipher.decrypt("X", &square).unwrap(), "X");
    let three = BifidCipher.encrypt("CAT", &square).unwrap();
    assert_eq!(BifidCipher.decrypt(&three, &square).unwrap(), "CAT");
}

#[test]
fn odd_polybius_digit_count_is_rejected() {
    let square = Square::standard();
    assert_eq!(
        PolybiusCipher.decrypt("1", &square),
        Err(CipherError::OddCoordinateCount(1))
    );
}

#[test]
fn duplicated_symbol_square_is_rejected() {
    let json = r#"[["A","B","C","D","E"],["F","G","H","I","K"],["L","M","N","O","P"],["Q","R","S","T","U"],["V","W","X","Y","V"]]"#;
    let err = SquareLoader::from_json_str(json, SquareVariant::Merged).unwrap_err();
    assert!(matches!(err, CipherError::InvalidSquare(_)));
}

#[test]
fn unrepresentable_symbol_is_reported_not_corrupted() {
    let square = Square::standard();
    for kind in [CipherKind::Bifid, CipherKind::Polybius] {
        let err = kind.cipher().encrypt("NO DIGITS 4U", &square).unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, CipherError::NotRepresentable { position: 2, .. }));
    }
}
