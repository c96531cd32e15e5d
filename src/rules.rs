// src/rules.rs
//! Fixed vocabulary and canned texts of the finance assistant.

/// Terms (Indonesian and English) that mark a message as finance related.
/// Matched as lower-case substrings, so order only affects which term hits first.
pub const FINANCE_KEYWORDS: &[&str] = &[
    "keuangan",
    "uang",
    "dana",
    "investasi",
    "saham",
    "obligasi",
    "reksadana",
    "menabung",
    "tabungan",
    "deposito",
    "kredit",
    "hutang",
    "cicilan",
    "bunga",
    "anggaran",
    "budget",
    "budgeting",
    "pengeluaran",
    "pemasukan",
    "gaji",
    "bisnis",
    "usaha",
    "profit",
    "keuntungan",
    "modal",
    "finansial",
    "ekonomi",
    "pajak",
    "asuransi",
    "pensiun",
    "dana darurat",
    "cash flow",
    "properti",
    "emas",
    "cryptocurrency",
    "crypto",
    "bitcoin",
    "trading",
    "forex",
    "bank",
    "atm",
    "kartu kredit",
    "pinjaman",
    "mortgage",
    "kpr",
    "financial",
    "money",
    "finance",
    "saving",
    "investment",
    "debt",
    "credit",
    "loan",
    "insurance",
    "retirement",
    "pension",
];

/// Instruction block placed at the top of every prompt.
pub const SYSTEM_PROMPT: &str = "Anda adalah FinanceAI, asisten AI keuangan yang hanya membahas topik seputar keuangan dan finansial.

Sebagai FinanceAI, Anda memiliki kemampuan untuk:
- Mengingat percakapan sebelumnya dalam sesi yang sama
- Memberikan jawaban yang berkesinambungan dan kontekstual
- Merujuk kembali ke informasi yang telah dibahas sebelumnya

Topik yang boleh dibahas:
- Keuangan personal dan budgeting
- Investasi (saham, obligasi, reksadana, properti, emas, crypto)
- Menabung dan dana darurat
- Manajemen hutang dan kredit
- Perencanaan keuangan dan pensiun
- Asuransi dan perlindungan finansial
- Bisnis dan kewirausahaan
- Pajak dan perencanaan pajak
- Banking dan produk finansial

PENTING:
- Jika user bertanya di luar topik keuangan, jawab dengan: \"Maaf, saya hanya bisa membantu pertanyaan seputar keuangan.\"
- Jika ada percakapan sebelumnya, gunakan konteks tersebut untuk memberikan jawaban yang lebih personal dan relevan
- Berikan jawaban yang informatif, praktis, dan mudah dipahami dalam bahasa Indonesia
- Gunakan contoh konkret jika memungkinkan
- Jika user merujuk ke pertanyaan sebelumnya, pastikan Anda mengingat dan merespons dengan tepat";

/// Header of the history section.
pub const HISTORY_HEADER: &str = "Percakapan sebelumnya:";

/// Label for the current message when a history section precedes it.
pub const CURRENT_QUESTION_LABEL: &str = "Pertanyaan user saat ini:";

/// Label for the current message when there is no history.
pub const QUESTION_LABEL: &str = "Pertanyaan user:";

/// Number of prior turns forwarded to the model.
pub const HISTORY_WINDOW: usize = 10;

pub const REFUSAL_TEXT: &str = "Maaf, saya hanya bisa membantu pertanyaan seputar keuangan.";

pub const SYSTEM_ERROR_TEXT: &str =
    "Maaf, terjadi kesalahan sistem. Silakan coba lagi dalam beberapa saat.";

pub const UNAVAILABLE_TEXT: &str =
    "Maaf, layanan asisten keuangan belum tersedia. Silakan coba lagi nanti.";

pub const DEMO_TEXT: &str =
    "Hello from FinanceAI API! This is a demo endpoint for the finance chatbot.";

/// Seconds a client should wait before re-sending after a gateway failure.
pub const RETRY_AFTER_SECS: u64 = 10;
