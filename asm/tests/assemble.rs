use hackasm::{assemble, symbol::Kind, Assembler, Error};

fn words(source: &str) -> Vec<String> {
    assemble(source)
        .unwrap()
        .lines()
        .map(|s| s.to_string())
        .collect()
}

fn error(source: &str) -> Error {
    assemble(source).unwrap_err().error
}

const MAX: &str = "\
// Computes R2 = max(R0, R1)
   @R0
   D=M              // D = first number
   @R1
   D=D-M            // D = first number - second number
   @OUTPUT_FIRST
   D;JGT            // if D>0 (first is greater) goto output_first
   @R1
   D=M              // D = second number
   @OUTPUT_D
   0;JMP            // goto output_d
(OUTPUT_FIRST)
   @R0
   D=M              // D = first number
(OUTPUT_D)
   @R2
   M=D              // M[2] = D (greatest number)
(INFINITE_LOOP)
   @INFINITE_LOOP
   0;JMP            // infinite loop
";

const MAX_HACK: &str = "\
0000000000000000
1111110000010000
0000000000000001
1111010011010000
0000000000001010
1110001100000001
0000000000000001
1111110000010000
0000000000001100
1110101010000111
0000000000000000
1111110000010000
0000000000000010
1110001100001000
0000000000001110
1110101010000111";

const SUM: &str = "\
    @i
    M=1     // i = 1
    @sum
    M=0     // sum = 0
(LOOP)
    @i
    D=M
    @100
    D=D-A
    @END
    D;JGT   // if (i - 100) > 0 goto END
    @i
    D=M
    @sum
    M=D+M   // sum += i
    @i
    M=M+1   // i++
    @LOOP
    0;JMP
(END)
    @END
    0;JMP
";

#[test]
fn max_program() {
    assert_eq!(assemble(MAX).unwrap(), MAX_HACK);
}

#[test]
fn add_constants() {
    let words = words("@2\nD=A\n@3\nD=D+A\n@0\nM=D");
    assert_eq!(words.len(), 6);
    for (idx, word) in words.iter().enumerate() {
        assert_eq!(word.len(), 16);
        if idx % 2 == 0 {
            assert!(word.starts_with('0'), "{idx}: {word}");
        } else {
            assert!(word.starts_with("111"), "{idx}: {word}");
        }
    }
    assert_eq!(words[1], "1110110000010000");
    assert_eq!(words[3], "1110000010010000");
}

#[test]
fn label_loop() {
    let asm = Assembler::new("(LOOP)\n@LOOP\n0;JMP").unwrap().run().unwrap();
    assert_eq!(asm.symbols.resolve("LOOP"), Ok(0));
    let hack = asm.to_hack();
    assert_eq!(hack, "0000000000000000\n1110101010000111");
    assert!(hack.ends_with("111"));
}

#[test]
fn variables_in_first_use_order() {
    let asm = Assembler::new(SUM).unwrap().run().unwrap();
    assert_eq!(asm.symbols.resolve("i"), Ok(16));
    assert_eq!(asm.symbols.resolve("sum"), Ok(17));
    assert_eq!(asm.symbols.resolve("LOOP"), Ok(4));
    assert_eq!(asm.symbols.resolve("END"), Ok(18));

    let user: Vec<_> = asm
        .symbols
        .user_symbols()
        .map(|(name, entry)| (name, entry.kind, entry.value))
        .collect();
    assert_eq!(
        user,
        vec![
            ("LOOP", Kind::Label, 4),
            ("END", Kind::Label, 18),
            ("i", Kind::Variable, 16),
            ("sum", Kind::Variable, 17),
        ]
    );

    let words = words(SUM);
    assert_eq!(words.len(), 20);
    assert_eq!(words[0], "0000000000010000");
    assert_eq!(words[2], "0000000000010001");
    assert_eq!(words[4], words[0]);
    assert_eq!(words[8], "0000000000010010");
    assert_eq!(words[16], "0000000000000100");
}

#[test]
fn predefined_symbols() {
    let words = words("@SP\n@LCL\n@R4\n@THAT\n@SCREEN\n@KBD");
    assert_eq!(
        words,
        vec![
            "0000000000000000",
            "0000000000000001",
            "0000000000000100",
            "0000000000000100",
            "0100000000000000",
            "0110000000000000",
        ]
    );
}

#[test]
fn idempotent() {
    let first = assemble(SUM).unwrap();
    let second = assemble(SUM).unwrap();
    assert_eq!(first, second);
    assert_eq!(assemble("@x").unwrap(), assemble("@x").unwrap());
}

#[test]
fn address_boundary() {
    assert_eq!(assemble("@32767").unwrap(), "0111111111111111");
    assert_eq!(
        error("@32768"),
        Error::AddressOutOfRange("32768".to_string())
    );
}

#[test]
fn duplicate_label() {
    let err = assemble("(X)\n@1\n(X)\n@2").unwrap_err();
    assert_eq!(err.error, Error::DuplicateLabel("X".to_string()));
    assert_eq!(err.idx, 2);
    assert_eq!(error("(KBD)\n@1"), Error::DuplicateLabel("KBD".to_string()));
}

#[test]
fn syntax_errors() {
    assert_eq!(error("D=D*A"), Error::UnknownComputation("D*A".to_string()));
    assert_eq!(error("B=1"), Error::UnknownDest("B".to_string()));
    assert_eq!(error("0;JUMP"), Error::UnknownJump("JUMP".to_string()));
    assert_eq!(error("(OOPS"), Error::MalformedInstruction("(OOPS".to_string()));
}

#[test]
fn blank_and_comment_only() {
    assert_eq!(assemble("").unwrap(), "");
    assert_eq!(assemble("// nothing\n\n   \n").unwrap(), "");
    assert_eq!(assemble("(ONLY)").unwrap(), "");
}

#[test]
fn whitespace_inside_instructions() {
    assert_eq!(assemble("A M = M - 1 ; J N E").unwrap(), assemble("AM=M-1;JNE").unwrap());
    assert_eq!(assemble("@2\r\nD=A\r\n").unwrap(), "0000000000000010\n1110110000010000");
}

#[test]
fn nested_parens_name_the_label() {
    let asm = Assembler::new("((X))\n@X").unwrap().run().unwrap();
    assert_eq!(asm.symbols.resolve("X"), Ok(0));
    assert!(!asm.symbols.contains("(X)"));
    assert_eq!(asm.symbols.user_symbols().count(), 1);
    assert_eq!(asm.to_hack(), "0000000000000000");
}

#[test]
fn plus_signed_literal() {
    assert_eq!(assemble("@+5").unwrap(), "0000000000000101");
    let asm = Assembler::new("@-1").unwrap().run().unwrap();
    assert_eq!(asm.symbols.resolve("-1"), Ok(16));
}

#[test]
fn variables_run_out_of_ram() {
    let count = 32768 - 16;
    let mut source: String = (0..count).map(|i| format!("@v{i}\n")).collect();
    assert!(assemble(&source).is_ok());

    source.push_str("@overflow\n");
    let err = assemble(&source).unwrap_err();
    assert_eq!(err.error, Error::AddressOutOfRange("overflow".to_string()));
    assert_eq!(err.idx, count);
}

#[test]
fn program_fills_rom() {
    let mut source = "D=A\n".repeat(32768);
    assert_eq!(assemble(&source).unwrap().lines().count(), 32768);

    source.push_str("D=A\n");
    let err = assemble(&source).unwrap_err();
    assert_eq!(err.error, Error::AddressOutOfRange("32768".to_string()));
    assert_eq!(err.idx, 32768);
}
