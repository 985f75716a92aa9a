//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use serde_json::json;

use crate::translations::Translations;
use crate::translator::Translator;

/// テスト用の Translations を作成する
///
/// `en` ロケールに以下のツリーを登録する:
/// `{ greeting: { hello: "Hi %{name}!" }, farewell: "Bye" }`
pub(crate) fn create_translations() -> Translations {
    let mut translations = Translations::new();
    translations.insert(
        "en",
        json!({
            "greeting": { "hello": "Hi %{name}!" },
            "farewell": "Bye"
        }),
    );
    translations
}

/// テスト用の Translator を作成する
///
/// # Returns
/// ロケール `en` と [`create_translations`] のデータを持つ Translator
pub(crate) fn create_translator() -> Translator {
    Translator::new(Some("en")).with_translations(create_translations())
}
