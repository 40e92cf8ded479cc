use crate::model::LeaderboardEntry;

fn url(base: &str) -> String {
    format!("{base}/leaderboard")
}

/// `getLeaderboard()`: el almacén devuelve la lista ya ordenada y con los
/// puestos asignados.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch(base: &str) -> Result<Vec<LeaderboardEntry>, String> {
    super::get_json(&url(base))
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch(base: &str) -> Result<Vec<LeaderboardEntry>, String> {
    super::get_json(&url(base)).await
}
