use feastly_core::{
    chunk, classify, filter_recipes, global_index, Category, FilterState, NonEmptyText,
    Pagination, Recipe, TextList,
};

fn recipe(id: &str, title: &str, description: &str) -> Recipe {
    Recipe::new(NonEmptyText::new(id).expect("id"), title, description)
}

fn sample_feed() -> Vec<Recipe> {
    vec![
        recipe("post_123", "Authentic Spanish Paella", "seafood and saffron rice")
            .with_ingredients(TextList::from_items(["2 cups Spanish rice", "1 lb mixed seafood"])),
        recipe("post_124", "The Perfect Steak", "garlic butter")
            .with_ingredients(TextList::from_items(["4 rib-eye steaks"])),
        recipe("post_125", "Lobster Bisque", "seafood delight"),
        recipe("post_126", "Crunchy salad", "with a spicy dressing")
            .with_instructions("Chop every vegetable."),
        recipe("post_127", "Chili con carne", "").with_ingredients("1 pound ground beef chuck"),
        recipe("post_128", "Texas chili", "smoky and spicy"),
        recipe("post_129", "", ""),
        recipe("post_130", "Pancakes", "fluffy").with_ingredients(TextList::Absent),
    ]
}

fn ids<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn classification_is_deterministic() {
    for r in sample_feed() {
        assert_eq!(classify(&r), classify(&r.clone()));
    }
}

#[test]
fn sample_feed_categories() {
    let got: Vec<Category> = sample_feed().iter().map(classify).collect();
    assert_eq!(
        got,
        vec![
            Category::Seafood,
            Category::Beef,
            Category::Seafood,
            Category::Vegetable,
            Category::Beef,
            Category::Spicy,
            Category::Other,
            Category::Other,
        ]
    );
}

#[test]
fn sequence_and_string_ingredients_behave_identically() {
    let listed = recipe("a", "Bowl", "").with_ingredients(TextList::from_items(["beef", "rice"]));
    let joined = recipe("b", "Bowl", "").with_ingredients("beef rice");
    assert_eq!(classify(&listed), classify(&joined));
    assert_eq!(listed.search_text(), joined.search_text());

    let feed = vec![listed, joined];
    for search in ["beef rice", "f r", "rice"] {
        let state = FilterState::default().with_search(search);
        assert_eq!(filter_recipes(&feed, &state).len(), 2, "search {search:?}");
    }
}

#[test]
fn filter_is_conjunction_of_category_and_search() {
    let feed = sample_feed();
    let categories = Category::ALL.into_iter().map(Some).chain([None]);
    for category in categories {
        for search in ["", "seafood", "SPICY", "rice", " ", "zzz"] {
            let both = filter_recipes(&feed, &FilterState::new(category, search));
            let by_category = filter_recipes(&feed, &FilterState::new(category, ""));
            let by_search = filter_recipes(&feed, &FilterState::new(None, search));

            let intersection: Vec<&Recipe> = by_category
                .iter()
                .copied()
                .filter(|r| by_search.iter().any(|s| s.id == r.id))
                .collect();
            assert_eq!(
                ids(&both),
                ids(&intersection),
                "category {category:?} search {search:?}"
            );
        }
    }
}

#[test]
fn empty_filter_is_identity() {
    let feed = sample_feed();
    let all = filter_recipes(&feed, &FilterState::default());
    let expected: Vec<&Recipe> = feed.iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn chunks_reconstruct_the_list() {
    for len in 0..20usize {
        let items: Vec<usize> = (0..len).collect();
        for size in 1..=8 {
            let pages = chunk(&items, size).expect("chunk");
            let rebuilt: Vec<usize> = pages.concat();
            assert_eq!(rebuilt, items, "len {len} size {size}");
        }
    }
}

#[test]
fn only_the_last_chunk_may_be_short() {
    for len in 1..20usize {
        let items: Vec<usize> = (0..len).collect();
        for size in 1..=8 {
            let pages = chunk(&items, size).expect("chunk");
            assert_eq!(pages.len(), len.div_ceil(size));
            let (last, full) = pages.split_last().expect("non-empty");
            assert!(full.iter().all(|p| p.len() == size));
            assert!(!last.is_empty() && last.len() <= size);
            if len % size != 0 {
                assert_eq!(last.len(), len % size);
            }
        }
    }
}

#[test]
fn pagination_walks_every_page_and_stops() {
    let total = 11;
    let mut p = Pagination::new(4).expect("pagination");
    let mut visited = vec![p.current_page()];
    for _ in 0..5 {
        p = p.next(total);
        visited.push(p.current_page());
    }
    assert_eq!(visited, vec![0, 1, 2, 2, 2, 2]);

    for _ in 0..5 {
        p = p.prev();
    }
    assert_eq!(p.current_page(), 0);
}

#[test]
fn global_index_matches_formula_and_selection() {
    let items: Vec<usize> = (0..23).collect();
    for size in 1..=7 {
        let pages = chunk(&items, size).expect("chunk");
        let mut p = Pagination::new(size).expect("pagination");
        for (page, content) in pages.iter().enumerate() {
            assert_eq!(p.current_page(), page);
            for (i, item) in content.iter().enumerate() {
                assert_eq!(global_index(page, size, i), page * size + i);
                assert_eq!(p.select(&items, i), Ok((*item, item)));
            }
            p = p.next(items.len());
        }
    }
}
