//! Plain-text rendering of a split.

use std::io::{self, Write};

use crate::engine::Summary;
use crate::model::{Group, Participant, ParticipantId};

const DIVIDER_WIDTH: usize = 42;

/// Write spending, totals, balances and transfers as a fixed-width table.
pub fn write_report(out: &mut impl Write, group: &Group, summary: &Summary) -> io::Result<()> {
    writeln!(out)?;
    divider(out, '=')?;

    for participant in group.participants() {
        writeln!(out, "{:>15} spent:    {:>16}", participant.name(), participant.spent())?;
    }
    divider(out, '-')?;

    writeln!(out, "   Total amount spent:   {:>17}", summary.total)?;
    writeln!(out, " Average amount spent: {:>19}", summary.average)?;
    divider(out, '-')?;

    for participant in group.participants() {
        writeln!(out, "{:>13} balance:  {:>18}", participant.name(), participant.balance())?;
    }
    divider(out, '-')?;

    for transfer in &summary.transfers {
        writeln!(
            out,
            "{:<9} → {:>9}: {:>19}",
            name_of(group, transfer.from),
            name_of(group, transfer.to),
            transfer.amount
        )?;
    }
    divider(out, '=')
}

fn name_of(group: &Group, id: ParticipantId) -> &str {
    group.get(id).map_or("?", Participant::name)
}

fn divider(out: &mut impl Write, character: char) -> io::Result<()> {
    writeln!(out, "{}", character.to_string().repeat(DIVIDER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cents;
    use crate::engine::split;
    use crate::model::Config;

    fn render(spends: &[(&str, i64)]) -> String {
        let mut group = Group::new(Config::default());
        for (name, spent) in spends {
            group.add(*name, Cents::from_minor(*spent)).unwrap();
        }
        let summary = split(&mut group).unwrap();

        let mut out = Vec::new();
        write_report(&mut out, &group, &summary).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_full_report() {
        let report = render(&[("Ann", 1000), ("Bob", 0), ("Cid", 0)]);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(42));
        assert_eq!(lines[2], "            Ann spent:               10.00");
        assert_eq!(lines[3], "            Bob spent:                0.00");
        assert_eq!(lines[5], "-".repeat(42));
        assert_eq!(lines[6], "   Total amount spent:               10.00");
        assert_eq!(lines[7], " Average amount spent:                3.33");
        assert_eq!(lines[9], "          Ann balance:                6.66");
        assert_eq!(lines[10], "          Bob balance:               -3.33");
        assert_eq!(lines[13], "Bob       →       Ann:                3.33");
        assert_eq!(lines[14], "Cid       →       Ann:                3.33");
        assert_eq!(lines[15], "=".repeat(42));
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn settled_group_has_no_transfer_lines() {
        let report = render(&[("Ann", 500), ("Bob", 500)]);
        let lines: Vec<&str> = report.lines().collect();

        assert!(!report.contains('→'));
        assert_eq!(lines[lines.len() - 2], "-".repeat(42));
        assert_eq!(lines[lines.len() - 1], "=".repeat(42));
    }
}
