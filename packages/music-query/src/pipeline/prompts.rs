//! Prompt templates for the text generator.
//!
//! Both personas forbid reproducing existing lyrics; the generator is asked
//! for new, original text only.

use crate::types::query::Language;

const STORY_SYSTEM_EN: &str = "You are a skilled storyteller who creates beautiful narrative summaries of songs. Never reproduce actual lyrics. Instead, capture the essence, emotions, and message of the song in story form. Your response should be clear, engaging, and meaningful. Provide a detailed summary of at least 150 words.";

const STORY_SYSTEM_HI: &str = "आप एक कुशल कहानीकार हैं जो गीतों की सुंदर कहानी-शैली में सारांश बनाते हैं। हमेशा मूल गीत के बोल कॉपी न करें, बल्कि गीत की भावना और संदेश को कहानी के रूप में प्रस्तुत करें। आपका जवाब स्पष्ट, सुंदर और रोचक हिंदी में होना चाहिए। कम से कम 150 शब्दों का विस्तृत सारांश दें।";

const STORY_USER_EN: &str = r#"Create a detailed and beautiful story-style summary for the song "{song}". Include:
1. The main emotion and message of the song
2. Key characters and their circumstances in the story
3. Emotions expressed through the song
4. Cultural and social context (if any)
5. Overall impact and significance of the song

Make the story engaging, emotional, and easy to understand."#;

const STORY_USER_HI: &str = r#"गीत "{song}" के लिए एक विस्तृत और सुंदर कहानी-शैली का सारांश बनाएं। इसमें शामिल करें:
1. गीत की मुख्य भावना और संदेश
2. कहानी के मुख्य किरदार और उनकी परिस्थितियां
3. गीत के माध्यम से व्यक्त होने वाली भावनाएं
4. सांस्कृतिक और सामाजिक संदर्भ (यदि कोई हो)
5. गीत का समग्र प्रभाव और महत्व

कहानी को रोचक, भावनात्मक और समझने योग्य बनाएं। सुंदर हिंदी भाषा का प्रयोग करें।"#;

const LYRICS_SYSTEM_EN: &str = r#"You are a skilled lyricist who writes original verses inspired by existing songs. You must:
1. Never copy copyrighted lyrics
2. Maintain the emotion and musical style of the original
3. Use proper rhythm, meter, and rhyme
4. Create at least 3 verses with 4-6 lines each
5. Ensure emotional depth in the verses
Write completely original content that captures similar feelings and themes."#;

const LYRICS_SYSTEM_HI: &str = r#"आप एक कुशल गीतकार हैं जो मूल गीतों की शैली में नए, मौलिक श्लोक लिखते हैं। आपको निम्नलिखित बातों का ध्यान रखना है:
1. कभी भी कॉपीराइट गीत के बोल कॉपी न करें
2. मूल गीत की भावना और तर्ज़ को बनाए रखें
3. उचित छंद, लय और तुकबंदी का प्रयोग करें
4. सुंदर हिंदी शब्दावली का उपयोग करें
5. कम से कम 3 श्लोक लिखें, हर श्लोक में 4-6 पंक्तियां हों
6. श्लोकों में भावनात्मक गहराई हो
हमेशा देवनागरी में लिखें और तुकबंदी का विशेष ध्यान रखें।"#;

const LYRICS_USER_EN: &str = r#"Write 3 original verses in the style of the song "{song}". Ensure:
1. Maintain the emotion and musical style of the original
2. Use proper rhythm, meter, and rhyme scheme
3. Each verse should express different emotions while staying connected to the main theme
4. Create completely original content with no copyrighted material
5. Consider the original song's melody and rhythm patterns"#;

const LYRICS_USER_HI: &str = r#"गीत "{song}" की शैली में 3 नए मौलिक श्लोक लिखें। ध्यान रखें:
1. मूल गीत की भावना और संगीत शैली को बनाए रखें
2. उचित तुकबंदी और छंद का प्रयोग करें
3. हर श्लोक अलग भाव व्यक्त करे लेकिन मुख्य विषय से जुड़ा रहे
4. सुंदर और भावनात्मक हिंदी शब्दों का प्रयोग करें
5. गीत की मूल तर्ज़ और रिदम को ध्यान में रखें

कृपया केवल मौलिक रचना करें, कोई कॉपीराइट सामग्री का उपयोग न करें।"#;

/// A system/user prompt pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Storyteller persona and request for a story summary.
pub fn story_prompts(song: &str, language: Language) -> PromptPair {
    let (system, user) = match language {
        Language::Hindi => (STORY_SYSTEM_HI, STORY_USER_HI),
        Language::English => (STORY_SYSTEM_EN, STORY_USER_EN),
    };
    PromptPair {
        system: system.to_string(),
        user: user.replace("{song}", song),
    }
}

/// Lyricist persona and request for three new verses.
pub fn lyrics_prompts(song: &str, language: Language) -> PromptPair {
    let (system, user) = match language {
        Language::Hindi => (LYRICS_SYSTEM_HI, LYRICS_USER_HI),
        Language::English => (LYRICS_SYSTEM_EN, LYRICS_USER_EN),
    };
    PromptPair {
        system: system.to_string(),
        user: user.replace("{song}", song),
    }
}
