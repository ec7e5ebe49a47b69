use crate::item::Script;

/// Four-script rendering shared by every composite record.
pub trait Renderable {
    fn kanji(&self) -> String;
    fn hiragana(&self) -> String;
    fn katakana(&self) -> String;
    fn romaji(&self) -> String;

    fn render(&self, script: Script) -> String {
        match script {
            Script::Kanji => self.kanji(),
            Script::Hiragana => self.hiragana(),
            Script::Katakana => self.katakana(),
            Script::Romaji => self.romaji(),
        }
    }
}
