//! The project deck: literal content and the order it is built in.

use crate::common::{Metadata, Result};
use crate::deck::DeckBuilder;
use crate::layout::Layout;

pub const DECK_TITLE: &str = "Tech Media RAG MVP";
pub const DECK_SUBTITLE: &str = "Интеллектуальный поиск и анализ статей технологических СМИ";
pub const AUTHOR: &str = "Tech Media RAG MVP";

/// Where the binary writes the deck, relative to the working directory.
pub const OUTPUT_PATH: &str = "docs/presentation.pptx";

/// Language of the deck text.
pub const LANGUAGE: &str = "ru-RU";

/// Bulleted sections in presentation order: heading and items.
pub const SECTIONS: &[(&str, &[&str])] = &[
    (
        "Проблема и цель",
        &[
            "Статей много, поиск по ключевым словам не покрывает смыслы и контекст",
            "Нужен агент: найти релевантные материалы, кратко резюмировать, дать ссылки на источники",
            "ЦА: студенты и специалисты, потребляющие IT-контент",
        ],
    ),
    (
        "MVP функциональность",
        &[
            "RAG-пайплайн: эмбеддинги запроса → поиск в Qdrant → генерация ответа",
            "Аннотационное резюме с цитированием источников [n]",
            "Фильтры: автор, дата, тематика",
            "Доп. функции: рекомендации похожих публикаций; генерация вопросов/теста",
            "Интерфейс: Telegram-бот",
        ],
    ),
    (
        "Архитектура (микросервисы)",
        &[
            "telegram-bot-service: UI/диалоги, фильтры, RPC в rag-service",
            "rag-service (GPU): retrieval + LLM summary/quiz/recommend (один CUDA-контекст)",
            "indexer-service: CSV → чанки → эмбеддинги → Qdrant upsert",
            "Транспорт: RabbitMQ RPC; Векторное хранилище: Qdrant",
        ],
    ),
    (
        "Этичность и безопасность",
        &[
            "Точные ссылки на источники и запрет на 'галлюцинации' в промпте",
            "Защита данных: минимизация логируемого текста, trace_id для трассировки",
            "Аутентификация: Telegram user_id; Авторизация: allowlist",
            "Service-to-service: API key в AMQP headers",
        ],
    ),
    (
        "Дальнейшее развитие",
        &[
            "Reranker и гибридный поиск (dense+sparse/BM25)",
            "Мультиязычность RU+EN, новые источники и дисциплины",
            "Загрузка PDF/HTML, планировщик переиндексации",
            "Кэширование и масштабирование компонентов",
        ],
    ),
];

/// Document properties of the project deck.
pub fn project_metadata() -> Metadata {
    Metadata {
        title: Some(DECK_TITLE.to_string()),
        subject: Some(DECK_SUBTITLE.to_string()),
        author: Some(AUTHOR.to_string()),
        revision: Some(1),
        language: Some(LANGUAGE.to_string()),
        ..Default::default()
    }
}

/// Append the title slide and every section to `builder`, in order.
pub fn assemble(builder: &mut DeckBuilder) -> Result<()> {
    builder.title_slide(DECK_TITLE, DECK_SUBTITLE)?;
    for &(heading, items) in SECTIONS {
        builder.bullets_slide(heading, items)?;
    }
    Ok(())
}

/// A builder holding the fully assembled project deck.
pub fn build_deck(layout: Layout) -> Result<DeckBuilder> {
    let mut builder = DeckBuilder::new(layout).with_metadata(project_metadata());
    assemble(&mut builder)?;
    Ok(builder)
}
