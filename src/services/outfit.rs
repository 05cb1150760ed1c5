//! Outfit decision table
//!
//! Maps a temperature and a weather condition onto one of twelve canned
//! recommendations. Hazard conditions (snow, rain) are checked before the
//! temperature ladder and win regardless of temperature. The ladder is a
//! list of ascending inclusive upper bounds; the first bound the temperature
//! does not exceed selects the band, and anything above the last bound falls
//! into the open-ended hottest band.

use crate::models::{RecommendationResult, WeatherBucket};

/// Placeholder replaced with the temperature in band explanations
const TEMPERATURE_PLACEHOLDER: &str = "{temp}";

/// Condition rules, checked in order before any temperature band
const HAZARD_RULES: [(&[&str], WeatherBucket); 2] = [
    (&["snow", "눈"], WeatherBucket::Snow),
    (&["rain", "비"], WeatherBucket::Rain),
];

/// Temperature ladder as `(inclusive upper bound °C, bucket)`, ascending
const TEMPERATURE_LADDER: [(f64, WeatherBucket); 9] = [
    (-5.0, WeatherBucket::Frigid),
    (0.0, WeatherBucket::Freezing),
    (5.0, WeatherBucket::Cold),
    (9.0, WeatherBucket::Chilly),
    (11.0, WeatherBucket::Cool),
    (17.0, WeatherBucket::Mild),
    (21.0, WeatherBucket::Pleasant),
    (25.0, WeatherBucket::Warm),
    (29.0, WeatherBucket::Hot),
];

/// Bucket for temperatures above every ladder bound
const ABOVE_LADDER: WeatherBucket = WeatherBucket::Sweltering;

/// Fixed texts attached to one bucket
struct OutfitEntry {
    outfits: [&'static str; 3],
    explanation: &'static str,
}

/// Picks the decision-table row for the given weather
pub fn classify(temperature: f64, condition: &str) -> WeatherBucket {
    let condition = condition.to_lowercase();

    if let Some((_, bucket)) = HAZARD_RULES
        .iter()
        .find(|(labels, _)| labels.contains(&condition.as_str()))
    {
        return *bucket;
    }

    TEMPERATURE_LADDER
        .iter()
        .find(|(upper_bound, _)| temperature <= *upper_bound)
        .map(|(_, bucket)| *bucket)
        .unwrap_or(ABOVE_LADDER)
}

/// Produces the outfit recommendation for the given weather
///
/// Total over every finite temperature and every condition string,
/// including the empty string. Identical inputs give identical results.
pub fn select(temperature: f64, condition: &str) -> RecommendationResult {
    render(classify(temperature, condition), temperature)
}

/// Renders the texts of `bucket`, interpolating `temperature` where the
/// explanation calls for it
pub fn render(bucket: WeatherBucket, temperature: f64) -> RecommendationResult {
    let entry = entry(bucket);
    let [option_1, option_2, option_3] = entry.outfits;

    RecommendationResult {
        option_1: option_1.to_string(),
        option_2: Some(option_2.to_string()),
        option_3: Some(option_3.to_string()),
        explanation: entry
            .explanation
            .replace(TEMPERATURE_PLACEHOLDER, &temperature.to_string()),
    }
}

fn entry(bucket: WeatherBucket) -> OutfitEntry {
    match bucket {
        WeatherBucket::Snow => OutfitEntry {
            outfits: [
                "롱패딩 + 니트 + 와이드 슬랙스 + 스니커즈",
                "숏패딩 + 후드집업 + 트레이닝 팬츠 + 운동화",
                "코트 + 목폴라 + 기모 슬랙스 + 부츠",
            ],
            explanation: "눈 오는 날엔 방한성과 보온성을 높인 따뜻한 코디를 추천드려요!",
        },
        WeatherBucket::Rain => OutfitEntry {
            outfits: [
                "아노락 집업 + 반바지 + 슬리퍼",
                "통풍형 바람막이 + 반바지 + 레인부츠",
                "반팔티 + 와이드 데님 팬츠 + 단화",
            ],
            explanation: "비 오는 날엔 방수 소재와 통풍이 잘 되는 코디를 추천드려요!",
        },
        WeatherBucket::Frigid => OutfitEntry {
            outfits: [
                "롱패딩 + 히트텍 + 맨투맨 + 기모 슬랙스 + 어그 슈즈 + 머플러",
                "패딩 + 니트 + 코듀로이 팬츠 + 방한 부츠",
                "다운점퍼 + 후드 + 카고팬츠 + 스니커즈 + 장갑",
            ],
            explanation: "{temp}°C의 혹한기에는 완전 방한 코디가 필수예요.",
        },
        WeatherBucket::Freezing => OutfitEntry {
            outfits: [
                "롱패딩 + 플리스 집업 + 기모 팬츠 + 스니커즈",
                "숏패딩 + 기모 후드티 + 카고 팬츠 + 어그 슈즈 + 장갑",
                "울 코트 + 니트 + 울 팬츠 + 부츠 + 머플러",
            ],
            explanation: "{temp}°C 이하의 한파에는 패딩이나 보온성 있는 코디를 추천드려요!",
        },
        WeatherBucket::Cold => OutfitEntry {
            outfits: [
                "숏패딩 + 맨투맨 + 조거 팬츠 + 운동화",
                "롱 코트 + 니트 + 데님 팬츠 + 더비 슈즈",
                "롱 파카 + 후드집업 + 트레이닝팬츠 + 운동화",
            ],
            explanation: "{temp}°C에는 두꺼운 아우터와 레이어드 코디를 추천드려요!",
        },
        WeatherBucket::Chilly => OutfitEntry {
            outfits: [
                "패딩 자켓 + 후드티 + 와이드 진 + 더비 슈즈",
                "발마칸 코트 + 니트 + 와이드 진 + 운동화",
                "피쉬테일 롱 패딩 + 기모 트레이닝 팬츠 + 어그 슈즈",
            ],
            explanation:
                "{temp}°C에는 아직 날이 쌀쌀하니 두께감 있는 자켓이나 코트를 활용해보세요.",
        },
        WeatherBucket::Cool => OutfitEntry {
            outfits: [
                "코듀로이 자켓 + 목폴라 니트 + 세미 와이드 데님 팬츠 + 더비 슈즈",
                "발마칸 코트 + 라운드 니트 + 와이드 데님 팬츠 + 스웨이드 슈즈",
                "숏패딩 + 기모 후드티 + 트레이닝 팬츠 + 운동화",
            ],
            explanation:
                "{temp}°C에는 아직 날이 쌀쌀하니 두께감 있는 자켓이나 코트를 활용해보세요.",
        },
        WeatherBucket::Mild => OutfitEntry {
            outfits: [
                "레더 자켓 + 니트 + 세미 와이드 데님 팬츠 + 더비 슈즈",
                "니트 가디건 + 긴팔티 + 와이드 슬랙스 + 운동화",
                "기모 후드티 + 반팔 + 트레이닝 팬츠 + 운동화",
            ],
            explanation: "{temp}°C에는 간절기에 대비해 겉옷을 준비하는 게 좋아요!",
        },
        WeatherBucket::Pleasant => OutfitEntry {
            outfits: [
                "블루종 + 니트 + 와이드 데님 팬츠 + 첼시 부츠",
                "크롭 니트 가디건 + 니트 + 와이드 슬랙스 + 더비 슈즈",
                "얇은 가디건 + 반팔 + 코튼팬츠 + 단화",
            ],
            explanation: "{temp}°C엔 가벼운 아우터를 이용한 코디를 추천드려요!",
        },
        WeatherBucket::Warm => OutfitEntry {
            outfits: [
                "반팔티 + 와이드 팬츠 + 스니커즈",
                "린넨 셔츠 + 슬랙스 + 샌들",
                "롱 슬리브 + 데님 반바지 + 운동화 + 크로스백",
            ],
            explanation: "{temp}°C엔 반팔 중심의 가벼운 코디가 좋아요.",
        },
        WeatherBucket::Hot => OutfitEntry {
            outfits: [
                "반팔티 + 반바지 + 슬리퍼",
                "반팔티 + 린넨팬츠 + 샌들",
                "린넨 셔츠 + 와이드 데님 팬츠 + 슬리퍼",
            ],
            explanation: "{temp}°C엔 통풍이 잘 되는 옷을 입어주세요.",
        },
        WeatherBucket::Sweltering => OutfitEntry {
            outfits: [
                "민소매 + 린넨 팬츠 + 슬리퍼 + 선글라스",
                "반팔 + 반바지 + 슬리퍼",
                "린넨 셔츠 + 반바지 + 샌들",
            ],
            explanation: "{temp}°C 이상의 무더운 날씨엔 시원하고 얇은 소재를 추천드려요!",
        },
    }
}
