/// Base address of the screen memory map.
pub const SCREEN: u16 = 16384;
/// Address of the keyboard register.
pub const KBD: u16 = 24576;
/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Symbols every program starts with. The segment pointers alias `R0`..`R4`.
pub const PREDEFINED: [(&str, u16); 23] = [
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];

#[test]
fn test() {
    for (idx, (name, addr)) in PREDEFINED.iter().take(16).enumerate() {
        assert_eq!(*name, format!("R{idx}"));
        assert_eq!(*addr as usize, idx);
    }
    for (name, addr) in &PREDEFINED[16..21] {
        let reg = format!("R{addr}");
        let (_, alias) = PREDEFINED.iter().find(|(n, _)| *n == reg).unwrap();
        assert_eq!(addr, alias, "{name}");
    }
}
