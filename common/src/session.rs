//! ダッシュボードのセッション状態
//!
//! `idle → uploading → processing → results-shown` の一方向の遷移のみ。
//! 入力チェックで弾かれた場合は状態を一切変えない。
//!
//! プレビュー読み込みと擬似処理タイマーは投げっぱなしで動くため、
//! アップロードごとに世代番号を振り、最新世代のコールバックだけを反映する。

use serde::Serialize;
use std::time::Duration;

use crate::error::Result;
use crate::i18n::Language;
use crate::types::DetectionResult;
use crate::upload::{validate_upload, UploadFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
    Processing,
    ResultsShown,
}

/// 受け付けたアップロード1件分の控え
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub generation: u64,
    pub delay: Duration,
}

/// 検出ダッシュボードの状態
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    phase: Phase,
    results: Vec<DetectionResult>,
    preview: Option<String>,
    file_name: Option<String>,
    drag_active: bool,
    generation: u64,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Uploading | Phase::Processing)
    }

    pub fn results(&self) -> &[DetectionResult] {
        &self.results
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// アップロード受付
    ///
    /// 入力チェックに失敗したらエラーを返し、状態は変更しない。
    /// 処理中に再度呼ばれた場合は新しい世代でやり直す。
    pub fn begin_upload(&mut self, file: &UploadFile, delay: Duration) -> Result<UploadTicket> {
        if let Err(err) = validate_upload(file) {
            tracing::warn!(file = %file.name, error = %err, "upload rejected");
            return Err(err);
        }

        self.generation += 1;
        self.drag_active = false;
        self.file_name = Some(file.name.clone());
        // 前のファイルの画像を新しいファイル名の下に出さない
        self.preview = None;
        self.phase = Phase::Uploading;
        tracing::debug!(generation = self.generation, file = %file.name, "upload accepted");

        Ok(UploadTicket {
            generation: self.generation,
            delay,
        })
    }

    fn is_current(&self, ticket: &UploadTicket) -> bool {
        ticket.generation == self.generation && self.is_processing()
    }

    /// プレビュー（data URL）を反映する
    ///
    /// 読込と擬似処理タイマーは独立して走るため、結果表示後に届いた
    /// プレビューも同じ世代なら受け付ける。フェーズは Uploading のときだけ進める。
    pub fn attach_preview(&mut self, ticket: &UploadTicket, data_url: String) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(generation = ticket.generation, "stale preview ignored");
            return false;
        }
        self.preview = Some(data_url);
        if self.phase == Phase::Uploading {
            self.phase = Phase::Processing;
        }
        true
    }

    /// 擬似処理完了。結果リストを丸ごと置き換える
    pub fn complete(&mut self, ticket: &UploadTicket, results: Vec<DetectionResult>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(generation = ticket.generation, "stale results ignored");
            return false;
        }
        self.results = results;
        self.phase = Phase::ResultsShown;
        tracing::debug!(count = self.results.len(), "results published");
        true
    }

    /// 結果とプレビューを破棄して待機状態へ戻す
    pub fn clear(&mut self) {
        self.results.clear();
        self.preview = None;
        self.file_name = None;
        self.phase = Phase::Idle;
        // 処理中のコールバックを無効化
        self.generation += 1;
    }
}

/// 農家向けダッシュボードの状態（言語とアラート表示）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FarmerSession {
    pub language: Language,
    pub show_alert: bool,
}

impl FarmerSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            show_alert: false,
        }
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    pub fn open_alert(&mut self) {
        self.show_alert = true;
    }

    pub fn acknowledge(&mut self) {
        self.show_alert = false;
    }

    /// 手順表示を選んだときもモーダルは閉じる
    pub fn show_instructions(&mut self) -> &'static str {
        self.show_alert = false;
        crate::presentation::INSTRUCTIONS_NOTICE
    }
}
