use sqlx::SqlitePool;

use crate::models::Meme;
use crate::store;

struct SeedMeme {
    title: &'static str,
    image_url: &'static str,
    description: &'static str,
    tags: [&'static str; 3],
    popularity: i64,
}

const SEED_MEMES: [SeedMeme; 6] = [
    SeedMeme {
        title: "제리 감사합니다",
        image_url: "/placeholder.svg?height=400&width=400&text=제리감사합니다",
        description: "제리가 정장을 입고 감사함을 표하는 밈으로, 감사 반응을 표현할 때 사용됩니다.",
        tags: ["리액션", "감사", "동물"],
        popularity: 1234,
    },
    SeedMeme {
        title: "눈물 흘리는 고양이",
        image_url: "/placeholder.svg?height=400&width=400&text=눈물고양이",
        description: "눈물을 흘리는 고양이 밈으로, 감동적이거나 슬픈 상황에 대한 반응을 표현할 때 사용됩니다.",
        tags: ["리액션", "슬픔", "동물"],
        popularity: 2345,
    },
    SeedMeme {
        title: "혼란스러운 수학 여성",
        image_url: "/placeholder.svg?height=400&width=400&text=혼란수학여성",
        description: "복잡한 수식을 보며 혼란스러워하는 여성의 밈으로, 이해하기 어려운 상황을 표현할 때 사용됩니다.",
        tags: ["리액션", "혼란", "드라마"],
        popularity: 3456,
    },
    SeedMeme {
        title: "두 버튼 고민하는 남자",
        image_url: "/placeholder.svg?height=400&width=400&text=두버튼고민",
        description: "두 개의 버튼 중 어떤 것을 누를지 고민하는 남자 밈으로, 어려운 선택의 상황을 표현할 때 사용됩니다.",
        tags: ["선택", "고민", "만화"],
        popularity: 4567,
    },
    SeedMeme {
        title: "아이 옆 화재",
        image_url: "/placeholder.svg?height=400&width=400&text=아이옆화재",
        description: "화재 현장 앞에서 미소짓는 어린 소녀의 밈으로, 장난을 치거나 혼란을 즐기는 상황을 표현할 때 사용됩니다.",
        tags: ["장난", "재난", "아이"],
        popularity: 5678,
    },
    SeedMeme {
        title: "스폰지밥 상상력",
        image_url: "/placeholder.svg?height=400&width=400&text=스폰지밥상상력",
        description: "무지개를 그리며 '상상력'을 표현하는 스폰지밥 밈으로, 비현실적인 기대나 상상을 표현할 때 사용됩니다.",
        tags: ["애니메이션", "상상", "유머"],
        popularity: 6789,
    },
];

/// Insert the bundled sample memes and link their tags.
///
/// Meme insertion is deliberately not idempotent: running the seed again
/// duplicates the meme rows. Tag resolution and linking are idempotent.
/// A failed item is logged and skipped; nothing is rolled back. Returns
/// the number of memes inserted.
pub async fn run(db: &SqlitePool) -> usize {
    let mut inserted = 0;

    for seed in &SEED_MEMES {
        let meme = Meme::new(
            seed.title.to_string(),
            seed.image_url.to_string(),
            Some(seed.description.to_string()),
            seed.popularity,
        );

        if let Err(e) = store::insert_meme(db, &meme).await {
            tracing::error!("Failed to insert seed meme {:?}: {e}", seed.title);
            continue;
        }
        inserted += 1;

        for &tag_name in &seed.tags {
            let tag_id = match store::resolve_tag(db, tag_name).await {
                Ok(id) => id,
                Err(e) => {
                    tracing::error!("Failed to resolve tag {tag_name:?}: {e}");
                    continue;
                }
            };

            if let Err(e) = store::link_meme_tag(db, &meme.id, &tag_id).await {
                tracing::error!("Failed to link tag {tag_name:?} to meme {:?}: {e}", seed.title);
            }
        }
    }

    inserted
}
