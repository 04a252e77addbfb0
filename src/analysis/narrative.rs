use super::types::{Narrative, PerformanceMetrics, PlayStyle, Trend};

const MAX_ITEMS: usize = 4;
const VERSATILE_POOL: usize = 5;
const WIDE_POOL: usize = 10;

const STRENGTH_FALLBACK: &str = "꾸준히 게임에 참여하며 경험을 쌓고 있습니다";
const IMPROVEMENT_FALLBACK: &str = "현재 플레이를 유지하면서 상위 티어 플레이어의 운영을 참고해 보세요";

/// Everything the templates may look at
struct Facts<'a> {
    score: u8,
    trend: Trend,
    metrics: &'a PerformanceMetrics,
    playstyle: &'a PlayStyle,
}

impl Facts<'_> {
    fn is_versatile(&self) -> bool {
        self.playstyle.champion_pool_size >= VERSATILE_POOL
    }
}

/// A sentence appended when its predicate holds
struct Rule {
    applies: fn(&Facts) -> bool,
    render: fn(&Facts) -> String,
}

const STRENGTH_RULES: [Rule; 8] = [
    Rule {
        applies: |f| f.metrics.avg_kda >= 3.0,
        render: |f| format!("뛰어난 생존력과 교전 기여도 (평균 KDA {:.2})", f.metrics.avg_kda),
    },
    Rule {
        applies: |f| f.metrics.avg_cs_per_min >= 7.0,
        render: |f| format!("안정적인 파밍 능력 (분당 CS {:.1})", f.metrics.avg_cs_per_min),
    },
    Rule {
        applies: |f| f.metrics.avg_vision_per_min >= 1.5,
        render: |f| format!("우수한 시야 장악 (분당 시야 점수 {:.2})", f.metrics.avg_vision_per_min),
    },
    Rule {
        applies: |f| f.metrics.recent_win_rate >= 55.0,
        render: |f| format!("높은 최근 승률 ({:.0}%)", f.metrics.recent_win_rate),
    },
    Rule {
        applies: |f| f.metrics.avg_damage_per_min >= 700.0,
        render: |f| format!("강력한 딜 기여 (분당 피해량 {:.0})", f.metrics.avg_damage_per_min),
    },
    Rule {
        applies: |f| f.metrics.consistency >= 70.0,
        render: |f| format!("기복 없는 꾸준한 경기력 (일관성 {:.0}점)", f.metrics.consistency),
    },
    Rule {
        applies: |f| (VERSATILE_POOL..WIDE_POOL).contains(&f.playstyle.champion_pool_size),
        render: |f| format!("넓은 챔피언 폭 ({}개 챔피언 사용)", f.playstyle.champion_pool_size),
    },
    Rule {
        applies: |f| f.trend == Trend::Ascending,
        render: |_| "최근 경기력이 상승세입니다".to_string(),
    },
];

const IMPROVEMENT_RULES: [Rule; 8] = [
    Rule {
        applies: |f| f.metrics.avg_kda < 2.0,
        render: |f| format!("데스 관리가 필요합니다 (평균 KDA {:.2})", f.metrics.avg_kda),
    },
    Rule {
        applies: |f| f.metrics.avg_cs_per_min < 6.0,
        render: |f| {
            format!(
                "파밍 효율을 높여 보세요 (분당 CS {:.1}, 목표 7.0 이상)",
                f.metrics.avg_cs_per_min
            )
        },
    },
    Rule {
        applies: |f| f.metrics.avg_vision_per_min < 1.0,
        render: |f| {
            format!(
                "와드 설치와 시야 장악에 더 신경 써 보세요 (분당 시야 점수 {:.2})",
                f.metrics.avg_vision_per_min
            )
        },
    },
    Rule {
        applies: |f| f.metrics.recent_win_rate < 50.0,
        render: |f| format!("최근 승률 회복이 필요합니다 ({:.0}%)", f.metrics.recent_win_rate),
    },
    Rule {
        applies: |f| f.metrics.avg_damage_per_min < 500.0,
        render: |f| {
            format!(
                "교전에서 더 적극적으로 딜을 넣어 보세요 (분당 피해량 {:.0})",
                f.metrics.avg_damage_per_min
            )
        },
    },
    Rule {
        applies: |f| f.metrics.consistency < 50.0,
        render: |f| {
            format!(
                "경기별 편차를 줄여 안정감을 높여 보세요 (일관성 {:.0}점)",
                f.metrics.consistency
            )
        },
    },
    Rule {
        applies: |f| f.playstyle.champion_pool_size >= WIDE_POOL,
        render: |f| {
            format!(
                "챔피언 폭을 좁혀 숙련도를 높여 보세요 (최근 {}개 챔피언 사용)",
                f.playstyle.champion_pool_size
            )
        },
    },
    Rule {
        applies: |f| f.trend == Trend::Descending,
        render: |_| "최근 하락세입니다. 휴식 후 플레이를 점검해 보세요".to_string(),
    },
];

/// Summary line, strengths and improvements for a score. Pure: the same
/// inputs always give the same text.
pub fn generate_narrative(
    score: u8,
    trend: Trend,
    metrics: &PerformanceMetrics,
    playstyle: &PlayStyle,
) -> Narrative {
    let facts = Facts {
        score,
        trend,
        metrics,
        playstyle,
    };

    Narrative {
        one_line: one_line(&facts),
        strengths: collect(&STRENGTH_RULES, &facts, STRENGTH_FALLBACK),
        improvements: collect(&IMPROVEMENT_RULES, &facts, IMPROVEMENT_FALLBACK),
    }
}

fn collect(rules: &[Rule], facts: &Facts, fallback: &str) -> Vec<String> {
    let mut items: Vec<String> = rules
        .iter()
        .filter(|rule| (rule.applies)(facts))
        .take(MAX_ITEMS)
        .map(|rule| (rule.render)(facts))
        .collect();

    if items.is_empty() {
        items.push(fallback.to_string());
    }
    items
}

fn one_line(f: &Facts) -> String {
    let m = f.metrics;

    match f.score {
        85..=u8::MAX => {
            if m.avg_kda >= 4.0 {
                format!(
                    "압도적인 교전 능력(KDA {:.1})으로 상위 티어 진입이 충분히 가능한 잠재력을 보여줍니다.",
                    m.avg_kda
                )
            } else if m.consistency >= 70.0 {
                "꾸준함과 실력을 모두 갖춘 최상위권 잠재력의 플레이어입니다.".to_string()
            } else {
                "최상위권 잠재력을 지녔습니다. 경기력 기복만 줄이면 더 높은 곳을 노릴 수 있습니다."
                    .to_string()
            }
        }
        70..=84 => {
            if m.avg_cs_per_min >= 7.0 {
                format!(
                    "안정적인 파밍(분당 CS {:.1})을 바탕으로 꾸준한 성장이 기대되는 플레이어입니다.",
                    m.avg_cs_per_min
                )
            } else if f.is_versatile() {
                "다양한 챔피언을 소화하는 유연함이 돋보이는 성장형 플레이어입니다.".to_string()
            } else {
                format!(
                    "높은 잠재력을 갖춘 플레이어입니다. 승률 {:.0}%를 유지하면 한 단계 도약이 가능합니다.",
                    m.recent_win_rate
                )
            }
        }
        55..=69 => {
            if f.trend == Trend::Ascending {
                "최근 상승세를 타고 있습니다. 지금의 흐름을 이어가세요.".to_string()
            } else if m.avg_kda >= 2.5 {
                format!(
                    "교전 능력(KDA {:.1})은 준수합니다. 운영 능력을 보완하면 더 성장할 수 있습니다.",
                    m.avg_kda
                )
            } else {
                "평균 이상의 잠재력을 가지고 있습니다. 기본기를 다지면 꾸준히 오를 수 있습니다."
                    .to_string()
            }
        }
        40..=54 => {
            if m.consistency < 40.0 {
                "경기마다 기복이 큽니다. 안정적인 플레이 패턴을 찾는 것이 우선입니다.".to_string()
            } else {
                "성장 가능성이 보이는 단계입니다. 약점을 하나씩 보완해 보세요.".to_string()
            }
        }
        _ => {
            if f.trend == Trend::Descending {
                "최근 흐름이 좋지 않습니다. 잠시 쉬어가며 플레이를 돌아보는 것도 방법입니다."
                    .to_string()
            } else {
                format!(
                    "기본기 연습이 필요한 단계입니다. 분당 CS({:.1})와 시야 관리부터 시작해 보세요.",
                    m.avg_cs_per_min
                )
            }
        }
    }
}
