use std::io::Write;

use anyhow::{Context, Result};

use crate::periods::PeriodsByPath;

/// Writes the human-readable report, flagging periods whose prescale isn't 1.
pub fn write_text(out: &mut impl Write, periods: &PeriodsByPath) -> Result<()> {
    for (path, periods) in periods {
        writeln!(out, "{path}")?;
        for period in periods {
            let marker = if period.prescale != 1 { "xx" } else { "  " };
            writeln!(out, "  {marker} {period}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_json(out: impl Write, periods: &PeriodsByPath) -> Result<()> {
    serde_json::to_writer_pretty(out, periods).context("Couldn't serialize report")
}

#[cfg(test)]
mod tests {
    use super::{write_json, write_text};
    use crate::periods::PeriodsByPath;
    use crate::types::{FixedPeriod, LsEnd, Seed};

    fn report() -> PeriodsByPath {
        let defined = FixedPeriod {
            path: "HLT_X_v1".to_owned(),
            start_run: 100,
            start_ls: 1,
            end_run: 100,
            end_ls: LsEnd::At(19),
            prescale: 1,
            seed: Seed::new("OR", "L1_B/1 L1_A/1"),
        };
        [(
            "HLT_X".to_owned(),
            vec![defined, FixedPeriod::undefined(101)],
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_text(&mut out, &report()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "HLT_X\n\
             \x20    (100, 1) -> (100, 19)  prescale=1  seed=OR(L1_A/1 L1_B/1)  [HLT_X_v1]\n\
             \x20 xx (101, 0) -> (101, inf)  prescale=0  seed=-  [undefined]\n\
             \n"
        );
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_json(&mut out, &report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "HLT_X": [
                    {
                        "path": "HLT_X_v1",
                        "start_run": 100,
                        "start_ls": 1,
                        "end_run": 100,
                        "end_ls": 19,
                        "prescale": 1,
                        "seed": {"logic": "OR", "bits": "L1_A/1 L1_B/1"}
                    },
                    {
                        "path": "undefined",
                        "start_run": 101,
                        "start_ls": 0,
                        "end_run": 101,
                        "end_ls": "inf",
                        "prescale": 0,
                        "seed": null
                    }
                ]
            })
        );
    }
}
