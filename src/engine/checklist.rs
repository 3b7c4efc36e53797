// ==========================================
// 生产合规看板 - 检查单评分
// ==========================================

use crate::domain::checklist::{ChecklistItem, ChecklistScore};

/// 检查单完成率
///
/// percent = round(completed / total * 100)，空检查单记为 0%
pub fn score_checklist(items: &[ChecklistItem]) -> ChecklistScore {
    let total_count = items.len();
    let (completed_count, last_verified_at) = items
        .iter()
        .filter(|item| item.completed)
        .fold((0usize, None), |(count, latest), item| {
            (count + 1, latest.max(item.verified_at))
        });

    let percent = if total_count == 0 {
        0
    } else {
        (completed_count as f64 / total_count as f64 * 100.0).round() as u32
    };

    ChecklistScore {
        percent,
        completed_count,
        total_count,
        last_verified_at,
    }
}
