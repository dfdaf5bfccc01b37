//! Seed training corpus for the Naive Bayes judge.

use super::sentiment::Sentiment;

/// Labelled example sentences, embedded at build time
pub const TRAINING_EXAMPLES: &[(&str, Sentiment)] = &[
    // Positive
    ("I love this game it is awesome", Sentiment::Positive),
    ("That cake was amazing and tasty", Sentiment::Positive),
    ("We had a fantastic time", Sentiment::Positive),
    ("The park is fun and cool", Sentiment::Positive),
    ("I really like my teacher", Sentiment::Positive),
    ("This book is great", Sentiment::Positive),
    ("Yay we won the match", Sentiment::Positive),
    ("What a wonderful day", Sentiment::Positive),
    ("The puppy is so cute and sweet", Sentiment::Positive),
    ("I enjoy science class", Sentiment::Positive),
    ("Good job team", Sentiment::Positive),
    // Neutral
    ("The book is on the table", Sentiment::Neutral),
    ("I have school at nine", Sentiment::Neutral),
    ("My cat is sleeping", Sentiment::Neutral),
    ("The weather is okay", Sentiment::Neutral),
    ("He lives on Maple Street", Sentiment::Neutral),
    ("It is Wednesday today", Sentiment::Neutral),
    ("We walked to the store", Sentiment::Neutral),
    ("Please pass the salt", Sentiment::Neutral),
    ("There are three apples", Sentiment::Neutral),
    ("The box is brown", Sentiment::Neutral),
    // Negative
    ("I hate getting up early", Sentiment::Negative),
    ("This soup tastes awful", Sentiment::Negative),
    ("The test was terrible", Sentiment::Negative),
    ("That was the worst day", Sentiment::Negative),
    ("My phone is boring me", Sentiment::Negative),
    ("I feel sad today", Sentiment::Negative),
    ("The bus is so slow", Sentiment::Negative),
    ("This mess is annoying", Sentiment::Negative),
    ("I dislike this level", Sentiment::Negative),
    ("The noise makes me angry", Sentiment::Negative),
];

/// Sentences from the "do the judges agree?" activity
pub const COMPARISON_SENTENCES: &[&str] = &[
    "I am not happy with this",
    "This game is really good",
    "The class was okay",
    "Super fun but the ending was bad",
    "I dislike the slow app",
    "We went to the park",
];
