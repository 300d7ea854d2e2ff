use primer_core::schema::app::*;
use primer_core::schema::db;
use primer_core::{derive, Bundle, RelationalConfig};
use pretty_assertions::assert_eq;

fn blog() -> Bundle {
    let mut bundle = Bundle::new("Primer", "Blog Posts");
    for model in [
        Model::new("User")
            .with_field(Field::new("name", "string").searchable(true))
            .unwrap()
            .with_field(Field::new("posts", "Post").list(true))
            .unwrap(),
        Model::new("BlogPost")
            .audited(true)
            .with_field(Field::new("title", "string"))
            .unwrap()
            .with_field(Field::new("tags", "Tag").list(true))
            .unwrap(),
        Model::new("Post")
            .with_field(Field::new("author", "User"))
            .unwrap(),
        Model::new("Tag")
            .with_field(Field::new("posts", "BlogPost").list(true))
            .unwrap(),
    ] {
        bundle.add_model(model).unwrap();
    }

    derive(&mut bundle, &RelationalConfig::default()).unwrap();
    bundle
}

fn model<'a>(bundle: &'a Bundle, name: &str) -> &'a Model {
    bundle.model_by_name(name).unwrap()
}

#[test]
fn database_and_table_names() {
    let bundle = blog();

    assert_eq!(db::database_name(&bundle), "primer_blog_post");
    assert_eq!(db::table_name(model(&bundle, "User")), "users");
    assert_eq!(db::table_name(model(&bundle, "BlogPost")), "blog_posts");
    assert_eq!(db::audit_table_name(model(&bundle, "BlogPost")), "blog_posts_logs");
    assert_eq!(db::model_column_name(model(&bundle, "BlogPost")), "blog_post_id");
}

#[test]
fn relation_table_name() {
    let bundle = blog();

    let tags = model(&bundle, "BlogPost").field("tags").unwrap();
    let many = tags.relation().unwrap().relationship;
    assert_eq!(db::relation_table_name(&bundle, many).unwrap(), "blog_posts_tags");

    let author = model(&bundle, "Post").field("author").unwrap();
    let err = db::relation_table_name(&bundle, author.relation().unwrap().relationship).unwrap_err();
    assert!(err.is_invariant_violation());
}

#[test]
fn column_names() {
    let bundle = blog();
    let post = model(&bundle, "Post");

    assert_eq!(db::column_name(&bundle, post.field("author").unwrap()), "author_id");
    assert_eq!(db::column_name(&bundle, post.field("id").unwrap()), "id");

    // `posts` is the one side: no key column.
    let user = model(&bundle, "User");
    assert_eq!(db::column_name(&bundle, user.field("posts").unwrap()), "posts");
    assert!(!db::is_valid_foreign_key(
        &bundle,
        user.field("posts").unwrap().relation().unwrap()
    ));
    assert!(db::is_valid_foreign_key(
        &bundle,
        post.field("author").unwrap().relation().unwrap()
    ));
}

#[test]
fn indexes() {
    let bundle = blog();

    let user_indexes = db::indexes(&bundle, model(&bundle, "User"));
    assert_eq!(user_indexes.len(), 1);
    assert_eq!(user_indexes[0].name, "name_idx");
    assert_eq!(user_indexes[0].description, "To optimize search queries");

    let post = model(&bundle, "Post");
    let post_indexes = db::indexes(&bundle, post);
    assert_eq!(post_indexes.len(), 1);
    assert_eq!(post_indexes[0].name, "author_id_idx");
    assert_eq!(post_indexes[0].description, "User foreign key");
    assert_eq!(post_indexes[0].fields, [post.field("author").unwrap().id()]);
}

#[test]
fn database_fields_skip_lists() {
    let bundle = blog();

    let names = |model: &Model| -> Vec<String> {
        db::database_fields(&bundle, model)
            .into_iter()
            .map(|f| f.name.clone())
            .collect()
    };

    assert_eq!(names(model(&bundle, "User")), ["name", "id"]);
    assert_eq!(names(model(&bundle, "Post")), ["author", "id"]);
}

#[test]
fn audited_fields() {
    let bundle = blog();
    let blog_post = model(&bundle, "BlogPost");

    let names = |include_id| {
        db::audited_fields(blog_post, include_id)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
    };

    assert_eq!(blog_post.fields().len(), 5);
    assert_eq!(names(true), ["title", "id"]);
    assert_eq!(names(false), ["title"]);
}
