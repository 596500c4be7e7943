//! The static compatibility-question catalog.
//!
//! 100 questions across six populated categories (20 lifestyle, 20 values,
//! 20 entertainment, 15 food, 15 social, 10 goals). `personality` and
//! `preferences` exist in the category type but currently hold no
//! questions. Source order is preserved for display and iteration.

use std::sync::LazyLock;

use tappr_core::entities::CompatibilityQuestion;
use tappr_core::enums::QuestionCategory;

fn q(
    id: &str,
    question: &str,
    category: QuestionCategory,
    options: &[&str],
    emoji: &str,
) -> CompatibilityQuestion {
    CompatibilityQuestion {
        id: id.to_string(),
        question: question.to_string(),
        category,
        options: options.iter().map(|o| (*o).to_string()).collect(),
        emoji: emoji.to_string(),
    }
}

#[rustfmt::skip]
pub(crate) static CATALOG: LazyLock<Vec<CompatibilityQuestion>> = LazyLock::new(|| vec![
    // Lifestyle (20 questions)
    q(
        "lifestyle_1",
        "Perfect weekend morning?",
        QuestionCategory::Lifestyle,
        &["Sleep in until noon", "Early morning workout", "Coffee and newspaper", "Outdoor adventure"],
        "🌅",
    ),
    q(
        "lifestyle_2",
        "Ideal living situation?",
        QuestionCategory::Lifestyle,
        &["City apartment", "Suburban house", "Rural farmhouse", "Beach house"],
        "🏠",
    ),
    q(
        "lifestyle_3",
        "Morning fuel of choice?",
        QuestionCategory::Lifestyle,
        &["Coffee (lots of it)", "Tea (zen vibes)", "Energy drinks", "Just water"],
        "☕",
    ),
    q(
        "lifestyle_4",
        "Favorite season?",
        QuestionCategory::Lifestyle,
        &["Spring (new beginnings)", "Summer (beach days)", "Fall (cozy vibes)", "Winter (snow magic)"],
        "🍂",
    ),
    q(
        "lifestyle_5",
        "Daily routine preference?",
        QuestionCategory::Lifestyle,
        &["Strict schedule", "Loose structure", "Go with the flow", "Chaos is fun"],
        "📅",
    ),
    q(
        "lifestyle_6",
        "Workout style?",
        QuestionCategory::Lifestyle,
        &["Gym beast mode", "Yoga and mindfulness", "Outdoor activities", "What workout?"],
        "💪",
    ),
    q(
        "lifestyle_7",
        "Pet preference?",
        QuestionCategory::Lifestyle,
        &["Dog person", "Cat person", "Exotic pets", "No pets please"],
        "🐕",
    ),
    q(
        "lifestyle_8",
        "Shopping approach?",
        QuestionCategory::Lifestyle,
        &["Plan and list", "Browse and discover", "Quick in and out", "Online only"],
        "🛒",
    ),
    q(
        "lifestyle_9",
        "Car vs other transport?",
        QuestionCategory::Lifestyle,
        &["Love driving", "Public transport", "Bike everywhere", "Walk when possible"],
        "🚗",
    ),
    q(
        "lifestyle_10",
        "Technology relationship?",
        QuestionCategory::Lifestyle,
        &["Early adopter", "Practical user", "Minimal tech", "What smartphone?"],
        "📱",
    ),
    q(
        "lifestyle_11",
        "Cleaning habits?",
        QuestionCategory::Lifestyle,
        &["Everything has a place", "Clean as needed", "Organized chaos", "Minimalist life"],
        "🧹",
    ),
    q(
        "lifestyle_12",
        "Money approach?",
        QuestionCategory::Lifestyle,
        &["Save and budget", "Invest for future", "Spend on experiences", "Live for today"],
        "💰",
    ),
    q(
        "lifestyle_13",
        "Climate preference?",
        QuestionCategory::Lifestyle,
        &["Always warm", "Four seasons", "Cool and crisp", "Doesn't matter"],
        "🌡️",
    ),
    q(
        "lifestyle_14",
        "News consumption?",
        QuestionCategory::Lifestyle,
        &["Daily news junkie", "Weekly summaries", "Social media only", "Ignorance is bliss"],
        "📰",
    ),
    q(
        "lifestyle_15",
        "Fashion approach?",
        QuestionCategory::Lifestyle,
        &["Trendy and stylish", "Classic and timeless", "Comfort first", "Whatever's clean"],
        "👕",
    ),
    q(
        "lifestyle_16",
        "Health approach?",
        QuestionCategory::Lifestyle,
        &["Strict healthy living", "Balance is key", "Enjoy life fully", "Wing it"],
        "🍎",
    ),
    q(
        "lifestyle_17",
        "Learning preference?",
        QuestionCategory::Lifestyle,
        &["Books and courses", "Hands-on experience", "YouTube tutorials", "Trial and error"],
        "📚",
    ),
    q(
        "lifestyle_18",
        "Vacation planning?",
        QuestionCategory::Lifestyle,
        &["Months in advance", "Few weeks ahead", "Last minute deals", "Spontaneous trips"],
        "✈️",
    ),
    q(
        "lifestyle_19",
        "Photography style?",
        QuestionCategory::Lifestyle,
        &["Instagram everything", "Special moments only", "Candid shots", "Live in the moment"],
        "📸",
    ),
    q(
        "lifestyle_20",
        "Sleep schedule?",
        QuestionCategory::Lifestyle,
        &["Early to bed/rise", "Night owl life", "Whatever works", "Sleep is overrated"],
        "😴",
    ),
    // Values & Personality (20 questions)
    q(
        "values_1",
        "Decision making style?",
        QuestionCategory::Values,
        &["Think it through", "Trust gut instinct", "Ask for advice", "Flip a coin"],
        "🤔",
    ),
    q(
        "values_2",
        "Conflict resolution?",
        QuestionCategory::Values,
        &["Talk it out calmly", "Give space first", "Address immediately", "Avoid if possible"],
        "🤝",
    ),
    q(
        "values_3",
        "Risk tolerance?",
        QuestionCategory::Values,
        &["Adventure seeker", "Calculated risks", "Play it safe", "Risk? No thanks"],
        "🎲",
    ),
    q(
        "values_4",
        "Honesty approach?",
        QuestionCategory::Values,
        &["Brutal honesty", "Kind but truthful", "White lies okay", "Feelings first"],
        "💯",
    ),
    q(
        "values_5",
        "Time management?",
        QuestionCategory::Values,
        &["Always early", "Right on time", "Fashionably late", "Time is relative"],
        "⏰",
    ),
    q(
        "values_6",
        "Change adaptation?",
        QuestionCategory::Values,
        &["Love change", "Adapt quickly", "Need time", "Resist change"],
        "🔄",
    ),
    q(
        "values_7",
        "Loyalty approach?",
        QuestionCategory::Values,
        &["Ride or die", "Earned over time", "Depends on person", "Everyone's different"],
        "🛡️",
    ),
    q(
        "values_8",
        "Ambition level?",
        QuestionCategory::Values,
        &["Sky's the limit", "Steady progress", "Work to live", "Simple pleasures"],
        "🎯",
    ),
    q(
        "values_9",
        "Forgiveness style?",
        QuestionCategory::Values,
        &["Forgive quickly", "Takes time", "Depends on situation", "Never forget"],
        "🕊️",
    ),
    q(
        "values_10",
        "Justice vs mercy?",
        QuestionCategory::Values,
        &["Rules are rules", "Context matters", "Second chances", "Compassion wins"],
        "⚖️",
    ),
    q(
        "values_11",
        "Independence level?",
        QuestionCategory::Values,
        &["Fiercely independent", "Like some space", "Better together", "Need connection"],
        "🗽",
    ),
    q(
        "values_12",
        "Optimism meter?",
        QuestionCategory::Values,
        &["Glass half full", "Realistic optimist", "Cautious outlook", "Expect the worst"],
        "🌈",
    ),
    q(
        "values_13",
        "Competitiveness?",
        QuestionCategory::Values,
        &["Must win everything", "Healthy competition", "Just for fun", "Avoid competing"],
        "🏆",
    ),
    q(
        "values_14",
        "Perfectionism level?",
        QuestionCategory::Values,
        &["Everything perfect", "High standards", "Good enough works", "Embrace imperfection"],
        "✨",
    ),
    q(
        "values_15",
        "Spontaneity vs planning?",
        QuestionCategory::Values,
        &["Totally spontaneous", "Mix of both", "Like to plan", "Everything scheduled"],
        "📋",
    ),
    q(
        "values_16",
        "Emotional expression?",
        QuestionCategory::Values,
        &["Wear heart on sleeve", "Open with close ones", "Keep it private", "What emotions?"],
        "❤️",
    ),
    q(
        "values_17",
        "Learning from failure?",
        QuestionCategory::Values,
        &["Failure is teaching", "Learn and move on", "Avoid if possible", "Failure isn't option"],
        "📈",
    ),
    q(
        "values_18",
        "Helping others?",
        QuestionCategory::Values,
        &["Always help", "When I can", "Close friends only", "Help yourself first"],
        "🤲",
    ),
    q(
        "values_19",
        "Tradition importance?",
        QuestionCategory::Values,
        &["Love traditions", "Some are nice", "Make new ones", "Traditions are outdated"],
        "🎭",
    ),
    q(
        "values_20",
        "Privacy level?",
        QuestionCategory::Values,
        &["Open book", "Share with friends", "Keep some private", "Very private person"],
        "🔒",
    ),
    // Entertainment (20 questions)
    q(
        "entertainment_1",
        "Movie night preference?",
        QuestionCategory::Entertainment,
        &["Action adventure", "Rom-com feels", "Mind-bending thriller", "Documentary deep dive"],
        "🎬",
    ),
    q(
        "entertainment_2",
        "Music discovery?",
        QuestionCategory::Entertainment,
        &["Mainstream hits", "Indie discoveries", "Vintage classics", "Whatever's on"],
        "🎵",
    ),
    q(
        "entertainment_3",
        "Reading preference?",
        QuestionCategory::Entertainment,
        &["Fiction escape", "Non-fiction learning", "Magazines/articles", "Audiobooks only"],
        "📖",
    ),
    q(
        "entertainment_4",
        "Gaming style?",
        QuestionCategory::Entertainment,
        &["Hardcore gamer", "Casual mobile games", "Board game nights", "Not into games"],
        "🎮",
    ),
    q(
        "entertainment_5",
        "TV binging approach?",
        QuestionCategory::Entertainment,
        &["Binge entire seasons", "Episode per night", "Background noise", "What TV?"],
        "📺",
    ),
    q(
        "entertainment_6",
        "Concert preference?",
        QuestionCategory::Entertainment,
        &["Front row energy", "Mid-crowd vibes", "Back with space", "Streaming at home"],
        "🎤",
    ),
    q(
        "entertainment_7",
        "Comedy style?",
        QuestionCategory::Entertainment,
        &["Slapstick funny", "Witty wordplay", "Dark humor", "Clean and wholesome"],
        "😂",
    ),
    q(
        "entertainment_8",
        "Art appreciation?",
        QuestionCategory::Entertainment,
        &["Museums and galleries", "Street art exploration", "Create my own", "Not really my thing"],
        "🎨",
    ),
    q(
        "entertainment_9",
        "Theater experience?",
        QuestionCategory::Entertainment,
        &["Broadway musicals", "Indie productions", "Comedy shows", "Skip the theater"],
        "🎭",
    ),
    q(
        "entertainment_10",
        "Podcast preference?",
        QuestionCategory::Entertainment,
        &["True crime obsessed", "Comedy podcasts", "Educational content", "Music only"],
        "🎧",
    ),
    q(
        "entertainment_11",
        "Party entertainment?",
        QuestionCategory::Entertainment,
        &["Dance all night", "Deep conversations", "Games and activities", "Observe from corner"],
        "🎉",
    ),
    q(
        "entertainment_12",
        "Sports involvement?",
        QuestionCategory::Entertainment,
        &["Play competitive", "Casual recreation", "Watch on TV", "Not into sports"],
        "⚽",
    ),
    q(
        "entertainment_13",
        "Horror movie tolerance?",
        QuestionCategory::Entertainment,
        &["Bring on the scares", "Light suspense okay", "Only with others", "Absolutely not"],
        "👻",
    ),
    q(
        "entertainment_14",
        "Reality TV opinion?",
        QuestionCategory::Entertainment,
        &["Guilty pleasure", "Some shows okay", "Not my style", "Complete trash"],
        "📱",
    ),
    q(
        "entertainment_15",
        "Social media usage?",
        QuestionCategory::Entertainment,
        &["Constant scrolling", "Daily check-ins", "Weekly browse", "Barely use it"],
        "📲",
    ),
    q(
        "entertainment_16",
        "News consumption style?",
        QuestionCategory::Entertainment,
        &["Multiple sources", "One trusted outlet", "Social media summaries", "Avoid the news"],
        "📰",
    ),
    q(
        "entertainment_17",
        "YouTube rabbit holes?",
        QuestionCategory::Entertainment,
        &["Hours of deep dives", "Specific interests only", "Quick videos", "Don't use YouTube"],
        "📹",
    ),
    q(
        "entertainment_18",
        "Festival experience?",
        QuestionCategory::Entertainment,
        &["Music festival life", "Food festivals", "Art and culture", "Too crowded for me"],
        "🎪",
    ),
    q(
        "entertainment_19",
        "Karaoke confidence?",
        QuestionCategory::Entertainment,
        &["Microphone hog", "With liquid courage", "Duets only", "Never happening"],
        "🎤",
    ),
    q(
        "entertainment_20",
        "Board game nights?",
        QuestionCategory::Entertainment,
        &["Strategic war games", "Party games", "Classic favorites", "Digital games only"],
        "🎲",
    ),
    // Food & Dining (15 questions)
    q(
        "food_1",
        "Cuisine adventure level?",
        QuestionCategory::Food,
        &["Try anything once", "Familiar with twist", "Stick to favorites", "Plain and simple"],
        "🍜",
    ),
    q(
        "food_2",
        "Cooking enthusiasm?",
        QuestionCategory::Food,
        &["Master chef wannabe", "Decent home cook", "Basic survival", "Takeout expert"],
        "👨‍🍳",
    ),
    q(
        "food_3",
        "Spice tolerance?",
        QuestionCategory::Food,
        &["Bring the heat", "Medium spice", "Mild please", "No spice at all"],
        "🌶️",
    ),
    q(
        "food_4",
        "Restaurant choice?",
        QuestionCategory::Food,
        &["Fine dining experience", "Local hidden gems", "Reliable chains", "Fast and convenient"],
        "🍽️",
    ),
    q(
        "food_5",
        "Breakfast importance?",
        QuestionCategory::Food,
        &["Most important meal", "Quick fuel up", "Coffee counts", "Skip to lunch"],
        "🥞",
    ),
    q(
        "food_6",
        "Dessert approach?",
        QuestionCategory::Food,
        &["Always room for dessert", "Special occasions", "Share a bite", "Not a sweet tooth"],
        "🍰",
    ),
    q(
        "food_7",
        "Food shopping style?",
        QuestionCategory::Food,
        &["Meal plan and list", "Fresh ingredients daily", "Stock up weekly", "Whatever's on sale"],
        "🛒",
    ),
    q(
        "food_8",
        "Dietary preferences?",
        QuestionCategory::Food,
        &["Plant-based", "Balanced omnivore", "Protein focused", "No restrictions"],
        "🥗",
    ),
    q(
        "food_9",
        "Coffee shop order?",
        QuestionCategory::Food,
        &["Complex specialty drink", "Classic with variations", "Simple black coffee", "Tea instead"],
        "☕",
    ),
    q(
        "food_10",
        "Food presentation?",
        QuestionCategory::Food,
        &["Instagram worthy", "Neat and tidy", "Function over form", "Who cares how it looks"],
        "📸",
    ),
    q(
        "food_11",
        "Snacking habits?",
        QuestionCategory::Food,
        &["Healthy snacks only", "Sweet tooth cravings", "Salty and crunchy", "Three meals enough"],
        "🍿",
    ),
    q(
        "food_12",
        "Wine/drink knowledge?",
        QuestionCategory::Food,
        &["Connoisseur level", "Know what I like", "Open to learning", "Not much interest"],
        "🍷",
    ),
    q(
        "food_13",
        "Food waste attitude?",
        QuestionCategory::Food,
        &["Use every bit", "Reasonable portions", "Sometimes wasteful", "Abundance mindset"],
        "♻️",
    ),
    q(
        "food_14",
        "Meal timing?",
        QuestionCategory::Food,
        &["Scheduled meal times", "When hungry", "Social eating", "Constant grazing"],
        "🕐",
    ),
    q(
        "food_15",
        "Food sharing?",
        QuestionCategory::Food,
        &["Family style everything", "Share appetizers", "Taste each other's", "Keep your own"],
        "🍽️",
    ),
    // Social & Relationships (15 questions)
    q(
        "social_1",
        "Party energy level?",
        QuestionCategory::Social,
        &["Life of the party", "Social butterfly", "Selective socializing", "Prefer small groups"],
        "🎉",
    ),
    q(
        "social_2",
        "Friend group size?",
        QuestionCategory::Social,
        &["Large social circle", "Core group of friends", "Few close friends", "Quality over quantity"],
        "👥",
    ),
    q(
        "social_3",
        "Meeting new people?",
        QuestionCategory::Social,
        &["Love new connections", "Open to introductions", "Warm up slowly", "Stick with known friends"],
        "🤝",
    ),
    q(
        "social_4",
        "Communication style?",
        QuestionCategory::Social,
        &["Text constantly", "Calls and voice messages", "Face to face preferred", "Minimal communication"],
        "💬",
    ),
    q(
        "social_5",
        "Social media sharing?",
        QuestionCategory::Social,
        &["Share everything", "Highlights only", "Private moments", "Rarely post"],
        "📱",
    ),
    q(
        "social_6",
        "Alone time needs?",
        QuestionCategory::Social,
        &["Need daily solitude", "Weekly recharge", "Occasionally", "Always want company"],
        "🧘",
    ),
    q(
        "social_7",
        "Conflict in groups?",
        QuestionCategory::Social,
        &["Address it directly", "Mediate peacefully", "Stay out of it", "Remove myself"],
        "🕊️",
    ),
    q(
        "social_8",
        "Birthday celebration style?",
        QuestionCategory::Social,
        &["Big party bash", "Dinner with friends", "Intimate gathering", "Low key or ignore"],
        "🎂",
    ),
    q(
        "social_9",
        "Gift giving approach?",
        QuestionCategory::Social,
        &["Thoughtful and personal", "Practical and useful", "Experiences over things", "Keep it simple"],
        "🎁",
    ),
    q(
        "social_10",
        "Social event planning?",
        QuestionCategory::Social,
        &["Love organizing", "Help when asked", "Just show up", "Prefer others plan"],
        "📋",
    ),
    q(
        "social_11",
        "Networking comfort?",
        QuestionCategory::Social,
        &["Natural networker", "Professional necessity", "Awkward but try", "Avoid networking"],
        "🤵",
    ),
    q(
        "social_12",
        "Group decision making?",
        QuestionCategory::Social,
        &["Take charge", "Offer input", "Go with majority", "Whatever others want"],
        "🗳️",
    ),
    q(
        "social_13",
        "Social energy recovery?",
        QuestionCategory::Social,
        &["More people = more energy", "Balance social and alone", "Need downtime after", "Drained by crowds"],
        "🔋",
    ),
    q(
        "social_14",
        "Loyalty in friendships?",
        QuestionCategory::Social,
        &["Friends for life", "Evolve naturally", "Seasonal friendships", "Practical connections"],
        "🤗",
    ),
    q(
        "social_15",
        "Support style?",
        QuestionCategory::Social,
        &["Emotional support", "Practical solutions", "Distraction and fun", "Give space"],
        "💪",
    ),
    // Goals & Aspirations (10 questions)
    q(
        "goals_1",
        "Career motivation?",
        QuestionCategory::Goals,
        &["Passion and purpose", "Financial security", "Work-life balance", "Make a difference"],
        "💼",
    ),
    q(
        "goals_2",
        "Success definition?",
        QuestionCategory::Goals,
        &["Personal happiness", "Professional achievement", "Family and relationships", "Impact on world"],
        "🏆",
    ),
    q(
        "goals_3",
        "Learning approach?",
        QuestionCategory::Goals,
        &["Always growing", "Practical skills", "Formal education", "Life experience"],
        "📚",
    ),
    q(
        "goals_4",
        "Risk vs security?",
        QuestionCategory::Goals,
        &["Take big risks", "Calculated chances", "Secure foundation", "Play it safe"],
        "⚖️",
    ),
    q(
        "goals_5",
        "Future planning?",
        QuestionCategory::Goals,
        &["Detailed life plan", "General direction", "Flexible goals", "Live in present"],
        "🗺️",
    ),
    q(
        "goals_6",
        "Legacy importance?",
        QuestionCategory::Goals,
        &["Leave lasting impact", "Inspire others", "Support family", "Enjoy the journey"],
        "🌟",
    ),
    q(
        "goals_7",
        "Challenge approach?",
        QuestionCategory::Goals,
        &["Seek challenges", "Rise when needed", "Prefer stability", "Avoid difficulties"],
        "⛰️",
    ),
    q(
        "goals_8",
        "Time vs money?",
        QuestionCategory::Goals,
        &["Time is precious", "Financial freedom", "Balance both", "Depends on situation"],
        "💰",
    ),
    q(
        "goals_9",
        "Impact scope?",
        QuestionCategory::Goals,
        &["Change the world", "Help community", "Support family/friends", "Focus on self"],
        "🌍",
    ),
    q(
        "goals_10",
        "Retirement dreams?",
        QuestionCategory::Goals,
        &["Travel the world", "Relaxed simple life", "New career/hobby", "Never retire"],
        "🏖️",
    ),
]);
