//! This module provides the share-string codec: a [`Program`] serialized to a
//! single JSON string that can be pasted between sessions or stuffed into a
//! URL by a front end.

use crate::programs::Program;
use crate::types::MachineError;

/// Encodes a program into its share-string form.
pub fn encode(program: &Program) -> Result<String, MachineError> {
    Ok(serde_json::to_string(program)?)
}

/// Decodes a share-string back into a program.
pub fn decode(encoded: &str) -> Result<Program, MachineError> {
    Ok(serde_json::from_str(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs::PROGRAMS;
    use crate::types::Step;

    #[test]
    fn test_round_trip_all_builtins() {
        for program in PROGRAMS.iter() {
            let encoded = encode(program).unwrap();
            let decoded = decode(&encoded).unwrap();
            assert_eq!(&decoded, program);
        }
    }

    #[test]
    fn test_decoded_program_still_runs() {
        let original = crate::programs::by_name("bit-flipper").unwrap();
        let decoded = decode(&encode(&original).unwrap()).unwrap();

        let mut machine = decoded.machine();
        assert_eq!(machine.run(), Step::Halted);
        assert_eq!(machine.tape().text(0, 3), "0100");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("not json"),
            Err(MachineError::Codec(_))
        ));
        assert!(matches!(decode("{}"), Err(MachineError::Codec(_))));
    }
}
