//! 検出シミュレーションの実行（CLI版）
//!
//! Web版と同じ `DashboardSession` を使い、ディレイは tokio で待つ。

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use sookshma_common::presentation::dashboard_copy as copy;
use sookshma_common::{DashboardSession, DetectionResult, DetectionSimulator};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, SookshmaError};
use crate::intake::{self, IntakeFile};

#[derive(Debug, Clone, Copy)]
pub struct SimulationOptions {
    /// 擬似処理ディレイを実際に待つか
    pub simulate_delay: bool,
    /// スピナーと進捗行を表示するか
    pub show_progress: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            simulate_delay: true,
            show_progress: true,
        }
    }
}

/// 1回分のアップロード結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(u32, u32)>,
    /// 実際に待った擬似処理時間（待たなかった場合は 0）
    pub processing_ms: u64,
    /// 結果確定時刻 (RFC 3339)
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    pub results: Vec<DetectionResult>,
}

/// アップロード1件を受け付け、ディレイ後に結果を確定させる
///
/// 入力チェックで弾かれた場合はセッションを変更せずエラーを返す。
pub async fn run_upload(
    session: &mut DashboardSession,
    simulator: &mut DetectionSimulator,
    intake: &IntakeFile,
    options: SimulationOptions,
) -> Result<DetectionReport> {
    let delay = simulator.processing_delay();
    let ticket = session.begin_upload(&intake.upload, delay)?;

    session.attach_preview(&ticket, intake.to_data_url());

    let spinner = if options.show_progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("{} {}", copy::PROCESSING_TITLE, copy::PROCESSING_HINT));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    } else {
        ProgressBar::hidden()
    };

    if options.simulate_delay {
        tokio::time::sleep(ticket.delay).await;
    }
    spinner.finish_and_clear();

    let results = simulator.run();
    session.complete(&ticket, results);

    Ok(DetectionReport {
        file_name: intake.upload.name.clone(),
        mime_type: intake.upload.mime_type.clone(),
        size_bytes: intake.upload.size_bytes,
        dimensions: intake.dimensions(),
        processing_ms: if options.simulate_delay { ticket.delay.as_millis() as u64 } else { 0 },
        generated_at: chrono::Local::now().to_rfc3339(),
        preview: session.preview().map(str::to_string),
        results: session.results().to_vec(),
    })
}

/// 複数ファイルを順にアップロードし、最後に受け付けた分のレポートを返す
///
/// 各アップロードは前の結果を置き換える。入力チェックで弾かれたファイルは
/// stderr に出して飛ばす。それ以外のエラー（ファイルが無い等）は中断。
/// 1件も受け付けなければ `NoValidUploads`。
pub async fn run_batch(
    paths: &[PathBuf],
    simulator: &mut DetectionSimulator,
    options: SimulationOptions,
) -> Result<DetectionReport> {
    let mut session = DashboardSession::new();
    let total = paths.len();
    let mut rejected = 0usize;
    let mut latest = None;

    for (index, path) in paths.iter().enumerate() {
        if options.show_progress {
            println!("[{}/{}] {}", index + 1, total, path.display());
        }

        let file = intake::read_upload(path)?;
        match run_upload(&mut session, simulator, &file, options).await {
            Ok(report) => {
                if options.show_progress {
                    println!("✔ {}\n", copy::SUCCESS_NOTICE);
                    print!("{}", crate::report::render_report(&report));
                }
                latest = Some(report);
            }
            Err(err) if err.is_upload_rejection() => {
                rejected += 1;
                eprintln!("✖ {}: {}", path.display(), err);
            }
            Err(err) => return Err(err),
        }
    }

    latest.ok_or(SookshmaError::NoValidUploads(rejected))
}
