use colored::{ColoredString, Colorize};
use unisocial_core::analysis::AnalysisResult;

/// Coarse rating shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::NeedsWork,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "优秀",
            Self::Good => "良好",
            Self::NeedsWork => "待提高",
        }
    }

    fn paint(&self, text: String) -> ColoredString {
        match self {
            Self::Excellent => text.bright_green().bold(),
            Self::Good => text.bright_yellow().bold(),
            Self::NeedsWork => text.bright_red().bold(),
        }
    }
}

pub fn print_report(scenario_title: &str, analysis: &AnalysisResult) {
    let band = ScoreBand::of(analysis.score);

    println!();
    println!("{}", format!("=== 表现分析：{scenario_title} ===").bright_magenta().bold());
    println!("{}", band.paint(format!("得分 {} / 100 ({})", analysis.score, band.label())));
    println!();
    println!("{}", analysis.summary);

    print_list("优点", &analysis.strengths, "✓");
    print_list("改进建议", &analysis.improvements, "→");

    println!();
    println!("{} {}", "语气分析:".cyan().bold(), analysis.tone_analysis);
    println!();
}

fn print_list(title: &str, items: &[String], bullet: &str) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", title.cyan().bold());
    for item in items {
        println!("  {bullet} {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::of(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(79), ScoreBand::Good);
        assert_eq!(ScoreBand::of(50), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::of(0), ScoreBand::NeedsWork);
    }
}
