use anyhow::Result;
use working_time::core::demo;

const EXPECTED: &str = "\
true
00:45
true
false
01:15
-01:00
03:30
Range `-01:00 to 12:00` does not define a valid workday.
";

#[test]
fn test_demo_matches_golden_output() -> Result<()> {
    let mut buffer = Vec::new();
    demo::run(&mut buffer)?;

    assert_eq!(String::from_utf8(buffer)?, EXPECTED);
    Ok(())
}
