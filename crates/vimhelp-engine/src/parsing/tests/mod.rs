//! Parser behaviour tests for the user manual grammar.
//!
//! Each case is a snippet framed by blank lines, as it appears inside a page.
//! Trees are compared whole; rendered HTML is pinned with inline snapshots.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{BlockType, Node, TreeBuilder, build, clean},
    grammar::{Grammar, usr},
    parse_document, render_document,
    snapshot::{invariants, outline},
};
use crate::xref::test_support::sample_xref;

use BlockType::*;

fn grammar() -> Grammar {
    usr::grammar().unwrap()
}

fn tree(lines: &[&str]) -> Node {
    let grammar = grammar();
    let tree = build(&grammar, lines);
    invariants(&grammar, &tree);
    tree
}

fn doc(children: Vec<Node>) -> Node {
    Node::block(Document, children)
}

fn block(kind: BlockType, children: Vec<Node>) -> Node {
    Node::block(kind, children)
}

fn leaf(kind: BlockType, lines: &[&str]) -> Node {
    Node::block(kind, lines.iter().copied().map(Node::text).collect())
}

fn para(lines: &[&str]) -> Node {
    leaf(Paragraph, lines)
}

fn item(children: Vec<Node>) -> Node {
    block(ListItem, children)
}

// Section headers

#[test]
fn section_headers_follow_separators() {
    assert_eq!(
        tree(&[
            "",
            "==============================================================================",
            "Header",
            "",
            "==============================================================================",
            "*22.3* Header",
            "",
            "==============================================================================",
            "*22.3* Header *tag-target*",
            "",
        ]),
        doc(vec![
            leaf(SectionHeader, &["Header"]),
            leaf(SectionHeader, &["*22.3* Header"]),
            leaf(SectionHeader, &["*22.3* Header *tag-target*"]),
        ])
    );
}

#[test]
fn sub_section_headers() {
    assert_eq!(
        tree(&["", "LOREM IPSUM", "", "DOLOR SIT AMET!?", ""]),
        doc(vec![
            leaf(SubSectionHeader, &["LOREM IPSUM"]),
            leaf(SubSectionHeader, &["DOLOR SIT AMET!?"]),
        ])
    );
    assert_eq!(
        tree(&[
            "",
            "LOREM IPSUM\t\t*target*",
            "",
            "DOLOR SIT AMET!?\t*target-1* *target-2*",
            "",
        ]),
        doc(vec![
            leaf(SubSectionHeader, &["LOREM IPSUM\t\t*target*"]),
            leaf(SubSectionHeader, &["DOLOR SIT AMET!?\t*target-1* *target-2*"]),
        ])
    );
}

// Ordered lists

#[test]
fn ordered_list_with_a_single_item() {
    assert_eq!(
        tree(&["", "1) lorem ipsum", ""]),
        doc(vec![block(OrderedList, vec![item(vec![para(&["1) lorem ipsum"])])])])
    );
}

#[test]
fn ordered_list_items_span_lines() {
    assert_eq!(
        tree(&["", "1) lorem ipsum", "   dolor sit amet", ""]),
        doc(vec![block(
            OrderedList,
            vec![item(vec![para(&["1) lorem ipsum", "   dolor sit amet"])])]
        )])
    );
}

#[test]
fn ordered_list_with_several_items() {
    assert_eq!(
        tree(&["", "1) lorem ipsum", "", "2) dolor sit amet", ""]),
        doc(vec![block(
            OrderedList,
            vec![
                item(vec![para(&["1) lorem ipsum"])]),
                item(vec![para(&["2) dolor sit amet"])]),
            ]
        )])
    );

    assert_eq!(
        tree(&[
            "",
            "1) lorem ipsum",
            "   dolor sit amet",
            "",
            "2) lorem ipsum",
            "   dolor sit amet",
            "",
        ]),
        doc(vec![block(
            OrderedList,
            vec![
                item(vec![para(&["1) lorem ipsum", "   dolor sit amet"])]),
                item(vec![para(&["2) lorem ipsum", "   dolor sit amet"])]),
            ]
        )])
    );
}

#[test]
fn ordered_list_item_with_a_command_block() {
    assert_eq!(
        tree(&["", "1) lorem ipsum >", "\t:command", "<   dolor sit amet", ""]),
        doc(vec![block(
            OrderedList,
            vec![item(vec![
                para(&["1) lorem ipsum >"]),
                leaf(CommandBlock, &["\t:command"]),
                para(&["<   dolor sit amet"]),
            ])]
        )])
    );
}

#[test]
fn ordered_list_item_with_formatted_text_and_paragraphs() {
    assert_eq!(
        tree(&[
            "",
            "1.  Use the CTRL-G command.  You get a message like this (assuming the 'ruler'",
            "    option is off):",
            "",
            "\t\"usr_03.txt\" line 233 of 650 --35%-- col 45-52 ~",
            "",
            "    This shows the name of the file you are editing, the line number where the",
            "    cursor is, the total number of lines, the percentage of the way through",
            "    the file and the column of the cursor.",
            "       Sometimes you will see a split column number.  For example, \"col 2-9\".",
            "    This indicates that the cursor is positioned on the second character, but",
            "    because character one is a tab, occupying eight spaces worth of columns,",
            "    the screen column is 9.",
            "",
            "2.  Set the 'number' option.  This will display a line number in front of",
            "",
        ]),
        doc(vec![block(
            OrderedList,
            vec![
                item(vec![
                    para(&[
                        "1.  Use the CTRL-G command.  You get a message like this (assuming the 'ruler'",
                        "    option is off):",
                    ]),
                    leaf(
                        FormattedText,
                        &["\t\"usr_03.txt\" line 233 of 650 --35%-- col 45-52 ~"]
                    ),
                    para(&[
                        "    This shows the name of the file you are editing, the line number where the",
                        "    cursor is, the total number of lines, the percentage of the way through",
                        "    the file and the column of the cursor.",
                    ]),
                    para(&[
                        "       Sometimes you will see a split column number.  For example, \"col 2-9\".",
                        "    This indicates that the cursor is positioned on the second character, but",
                        "    because character one is a tab, occupying eight spaces worth of columns,",
                        "    the screen column is 9.",
                    ]),
                ]),
                item(vec![para(&[
                    "2.  Set the 'number' option.  This will display a line number in front of"
                ])]),
            ]
        )])
    );
}

#[test]
fn ordered_list_items_without_blank_lines_between_them() {
    assert_eq!(
        tree(&[
            "",
            "1.  The name of the browsing tool and its version number",
            "2.  The name of the browsing directory",
            "3.  The method of sorting (may be by name, time, or size)",
            "4.  How names are to be sorted (directories first, then *.h files,",
            "    *.c files, etc)",
            "5.  How to get help (use the <F1> key), and an abbreviated listing",
            "    of available commands",
            "6.  A listing of files, including \"../\", which allows one to list",
            "    the parent directory.",
            "",
            "If you have syntax highlighting enabled, the different parts are highlighted",
            "so as to make it easier to spot them.",
            "",
        ]),
        doc(vec![
            block(
                OrderedList,
                vec![
                    item(vec![para(&["1.  The name of the browsing tool and its version number"])]),
                    item(vec![para(&["2.  The name of the browsing directory"])]),
                    item(vec![para(&["3.  The method of sorting (may be by name, time, or size)"])]),
                    item(vec![para(&[
                        "4.  How names are to be sorted (directories first, then *.h files,",
                        "    *.c files, etc)",
                    ])]),
                    item(vec![para(&[
                        "5.  How to get help (use the <F1> key), and an abbreviated listing",
                        "    of available commands",
                    ])]),
                    item(vec![para(&[
                        "6.  A listing of files, including \"../\", which allows one to list",
                        "    the parent directory.",
                    ])]),
                ]
            ),
            para(&[
                "If you have syntax highlighting enabled, the different parts are highlighted",
                "so as to make it easier to spot them.",
            ]),
        ])
    );
}

// Unordered lists

#[test]
fn unordered_list_items_start_with_a_dash() {
    assert_eq!(
        tree(&[
            "",
            "-  Select two words in Visual mode.",
            "-  Use the Edit/Paste menu item.  What will happen is that the single selected",
            "   word is replaced with the two words from the clipboard.",
            "-  Move the mouse pointer somewhere else and click the middle button.  You",
            "   will see that the word you just overwrote with the clipboard is inserted",
            "   here.",
            "",
        ]),
        doc(vec![block(
            UnorderedList,
            vec![
                item(vec![para(&["-  Select two words in Visual mode."])]),
                item(vec![para(&[
                    "-  Use the Edit/Paste menu item.  What will happen is that the single selected",
                    "   word is replaced with the two words from the clipboard.",
                ])]),
                item(vec![para(&[
                    "-  Move the mouse pointer somewhere else and click the middle button.  You",
                    "   will see that the word you just overwrote with the clipboard is inserted",
                    "   here.",
                ])]),
            ]
        )])
    );
}

// Tables of contents

#[test]
fn chapter_table_of_contents() {
    assert_eq!(
        tree(&[
            "",
            "|01.1|\tTwo manuals",
            "|01.2|\tVim installed",
            "|01.3|\tUsing the Vim tutor",
            "|01.4|\tCopyright",
            "",
        ]),
        doc(vec![block(
            Toc,
            vec![
                leaf(TocItem, &["|01.1|\tTwo manuals"]),
                leaf(TocItem, &["|01.2|\tVim installed"]),
                leaf(TocItem, &["|01.3|\tUsing the Vim tutor"]),
                leaf(TocItem, &["|01.4|\tCopyright"]),
            ]
        )])
    );
}

// Notes

#[test]
fn note_with_a_paragraph() {
    assert_eq!(
        tree(&["", "\tNote:", "\tlorem ipsum", "\tdolor sit amet", ""]),
        doc(vec![block(
            Note,
            vec![Node::text("\tNote:"), para(&["\tlorem ipsum", "\tdolor sit amet"])]
        )])
    );
}

#[test]
fn note_with_a_command_block() {
    assert_eq!(
        tree(&["", "\tNote:", "\tlorem ipsum", "\tdolor sit amet >", "\t\t:command", ""]),
        doc(vec![block(
            Note,
            vec![
                Node::text("\tNote:"),
                para(&["\tlorem ipsum", "\tdolor sit amet >"]),
                leaf(CommandBlock, &["\t\t:command"]),
            ]
        )])
    );
}

#[test]
fn note_with_formatted_text() {
    assert_eq!(
        tree(&[
            "",
            "\tNote:",
            "\tlorem ipsum",
            "\tdolor sit amet",
            "\t\ttext",
            "\tsi vis pacem",
            "",
        ]),
        doc(vec![block(
            Note,
            vec![
                Node::text("\tNote:"),
                para(&["\tlorem ipsum", "\tdolor sit amet"]),
                leaf(FormattedText, &["\t\ttext"]),
                para(&["\tsi vis pacem"]),
            ]
        )])
    );
}

// Paragraphs

#[test]
fn paragraphs_are_separated_by_blank_lines() {
    assert_eq!(tree(&["", "lorem ipsum", ""]), doc(vec![para(&["lorem ipsum"])]));
    assert_eq!(
        tree(&["", "lorem ipsum", "dolor sit amet", ""]),
        doc(vec![para(&["lorem ipsum", "dolor sit amet"])])
    );
    assert_eq!(
        tree(&["", "lorem ipsum", "", "dolor sit amet", "", "ars longa, vita brevis", ""]),
        doc(vec![
            para(&["lorem ipsum"]),
            para(&["dolor sit amet"]),
            para(&["ars longa, vita brevis"]),
        ])
    );
    assert_eq!(
        tree(&[
            "",
            "lorem ipsum",
            "dolor sit amet",
            "",
            "ars longa, vita brevis",
            "veni, vidi, vici",
            "",
        ]),
        doc(vec![
            para(&["lorem ipsum", "dolor sit amet"]),
            para(&["ars longa, vita brevis", "veni, vidi, vici"]),
        ])
    );
}

#[test]
fn indented_lines_start_a_new_paragraph() {
    assert_eq!(
        tree(&["", "lorem ipsum", "   dolor sit amet", ""]),
        doc(vec![para(&["lorem ipsum"]), para(&["   dolor sit amet"])])
    );
}

// Command blocks

#[test]
fn command_blocks_after_a_paragraph() {
    assert_eq!(
        tree(&["", "lorem ipsum >", "\tcommand", ""]),
        doc(vec![para(&["lorem ipsum >"]), leaf(CommandBlock, &["\tcommand"])])
    );
    assert_eq!(
        tree(&["", "lorem ipsum >", "\tcommand", "\tcommand", ""]),
        doc(vec![
            para(&["lorem ipsum >"]),
            leaf(CommandBlock, &["\tcommand", "\tcommand"]),
        ])
    );
}

#[test]
fn command_blocks_between_paragraphs() {
    assert_eq!(
        tree(&["", "lorem ipsum >", "\tcommand", "< dolor sit amet", ""]),
        doc(vec![
            para(&["lorem ipsum >"]),
            leaf(CommandBlock, &["\tcommand"]),
            para(&["< dolor sit amet"]),
        ])
    );
    assert_eq!(
        tree(&["", "lorem ipsum >", "\tcommand", "\tcommand", "< dolor sit amet", ""]),
        doc(vec![
            para(&["lorem ipsum >"]),
            leaf(CommandBlock, &["\tcommand", "\tcommand"]),
            para(&["< dolor sit amet"]),
        ])
    );
}

#[test]
fn command_blocks_inside_list_items() {
    assert_eq!(
        tree(&["", "1) lorem ipsum >", "\tcommand", "\tcommand", "<   dolor sit amet", ""]),
        doc(vec![block(
            OrderedList,
            vec![item(vec![
                para(&["1) lorem ipsum >"]),
                leaf(CommandBlock, &["\tcommand", "\tcommand"]),
                para(&["<   dolor sit amet"]),
            ])]
        )])
    );
}

#[test]
fn command_blocks_at_the_end_of_a_list() {
    assert_eq!(
        tree(&["", "9) lorem ipsum >", "\tcommand", ""]),
        doc(vec![block(
            OrderedList,
            vec![item(vec![
                para(&["9) lorem ipsum >"]),
                leaf(CommandBlock, &["\tcommand"]),
            ])]
        )])
    );
    assert_eq!(
        tree(&["", "9) lorem ipsum >", "\tcommand", "\tcommand", ""]),
        doc(vec![block(
            OrderedList,
            vec![item(vec![
                para(&["9) lorem ipsum >"]),
                leaf(CommandBlock, &["\tcommand", "\tcommand"]),
            ])]
        )])
    );
}

#[test]
fn command_blocks_can_open_on_a_blank_line() {
    assert_eq!(
        tree(&[
            "",
            "The \"gu\" operator does exactly the opposite: >",
            "",
            "\t\t\t     guw",
            "<\tSECTION header\t    ---->      section header",
            "",
        ]),
        doc(vec![
            para(&["The \"gu\" operator does exactly the opposite: >"]),
            leaf(
                CommandBlock,
                &["\t\t\t     guw", "<\tSECTION header\t    ---->      section header"]
            ),
        ])
    );
}

// Formatted text

#[test]
fn formatted_text_is_indented() {
    assert_eq!(
        tree(&["", "\tlorem ipsum", ""]),
        doc(vec![leaf(FormattedText, &["\tlorem ipsum"])])
    );
    assert_eq!(
        tree(&["", "\tlorem ipsum", "\tdolor sit amet", ""]),
        doc(vec![leaf(FormattedText, &["\tlorem ipsum", "\tdolor sit amet"])])
    );
}

#[test]
fn formatted_text_spans_single_blank_lines() {
    assert_eq!(
        tree(&["", "\tlorem ipsum", "\tdolor sit amet", "", "\tsic transit", "\tgloria mundi", ""]),
        doc(vec![leaf(
            FormattedText,
            &["\tlorem ipsum", "\tdolor sit amet", "\tsic transit", "\tgloria mundi"]
        )])
    );
    assert_eq!(
        tree(&[
            "",
            "\tlorem ipsum",
            "\tdolor sit amet",
            "    foobar",
            "\tsic transit",
            "\tgloria mundi",
            "",
        ]),
        doc(vec![leaf(
            FormattedText,
            &["\tlorem ipsum", "\tdolor sit amet", "    foobar", "\tsic transit", "\tgloria mundi"]
        )])
    );
}

#[test]
fn formatted_text_spans_several_blank_lines() {
    assert_eq!(
        tree(&["", "\tlorem ipsum", "", "", "\tdolor sit amet", ""]),
        doc(vec![leaf(FormattedText, &["\tlorem ipsum", "\tdolor sit amet"])])
    );
}

#[test]
fn formatted_text_between_paragraphs() {
    assert_eq!(
        tree(&["", "lorem ipsum", "\tformatted", "dolor sit amet", "\tformatted", ""]),
        doc(vec![
            para(&["lorem ipsum"]),
            leaf(FormattedText, &["\tformatted"]),
            para(&["dolor sit amet"]),
            leaf(FormattedText, &["\tformatted"]),
        ])
    );
}

#[test]
fn formatted_text_marked_by_a_trailing_tilde() {
    assert_eq!(
        tree(&["", "  lorem ipsum ~", ""]),
        doc(vec![leaf(FormattedText, &["  lorem ipsum ~"])])
    );
}

#[test]
fn formatted_text_with_tabs_inside_lines() {
    let lines = [
        "\t+------------------+\t\t +------------------+",
        "\t| earlier text\t   |\t\t | earlier text\t    |",
        "\t| earlier text\t   |\t\t | earlier text\t    |",
        "\t| earlier text\t   |   zz  -->\t | line with cursor |",
        "\t| earlier text\t   |\t\t | later text\t    |",
        "\t| line with cursor |\t\t | later text\t    |",
        "\t+------------------+\t\t +------------------+",
    ];
    let input: Vec<&str> = std::iter::once("")
        .chain(lines)
        .chain(std::iter::once(""))
        .collect();

    assert_eq!(tree(&input), doc(vec![leaf(FormattedText, &lines)]));
}

#[test]
fn formatted_text_without_indentation() {
    assert_eq!(
        tree(&[
            "",
            "Through the magic of autocommands and Vim scripts, the window will be filled",
            "with the contents of the directory.  It looks like this:",
            "",
            "\" ============================================================================ ~",
            "\" Netrw Directory Listing                                        (netrw v109) ~",
            "\"   Sorted by      name ~",
            "\"   Quick Help: <F1>:help  -:go up dir  D:delete  R:rename  s:sort-by  x:exec ~",
            "\" ============================================================================ ~",
            "../ ~",
            "./ ~",
            "check/ ~",
            "Makefile ~",
            "eval.txt~ ~",
            "help.txt.info ~",
            "",
            "You can see these items:",
            "",
        ]),
        doc(vec![
            para(&[
                "Through the magic of autocommands and Vim scripts, the window will be filled",
                "with the contents of the directory.  It looks like this:",
            ]),
            leaf(
                FormattedText,
                &[
                    "\" ============================================================================ ~",
                    "\" Netrw Directory Listing                                        (netrw v109) ~",
                    "\"   Sorted by      name ~",
                    "\"   Quick Help: <F1>:help  -:go up dir  D:delete  R:rename  s:sort-by  x:exec ~",
                    "\" ============================================================================ ~",
                    "../ ~",
                    "./ ~",
                    "check/ ~",
                    "Makefile ~",
                    "eval.txt~ ~",
                    "help.txt.info ~",
                ]
            ),
            para(&["You can see these items:"]),
        ])
    );
}

// Tables

#[test]
fn table_with_single_line_rows() {
    assert_eq!(
        tree(&[
            "",
            "The 'laststatus' option can be used to specify when the last window has a",
            "statusline:",
            "",
            "\t0\tnever",
            "\t1\tonly when there are split windows (the default)",
            "\t2\talways",
            "",
        ]),
        doc(vec![
            para(&[
                "The 'laststatus' option can be used to specify when the last window has a",
                "statusline:",
            ]),
            block(
                Table,
                vec![
                    leaf(TableRow, &["\t0\tnever"]),
                    leaf(TableRow, &["\t1\tonly when there are split windows (the default)"]),
                    leaf(TableRow, &["\t2\talways"]),
                ]
            ),
        ])
    );
}

#[test]
fn table_with_multiline_rows() {
    assert_eq!(
        tree(&["", "\ta\tlorem ipsum", "\t\tdolor sit amet", "\tb\tmemento mori", ""]),
        doc(vec![block(
            Table,
            vec![
                leaf(TableRow, &["\ta\tlorem ipsum", "\t\tdolor sit amet"]),
                leaf(TableRow, &["\tb\tmemento mori"]),
            ]
        )])
    );
}

#[test]
fn table_without_indentation() {
    assert_eq!(
        tree(&[
            "",
            "Left mouse click\t\tposition the cursor",
            "Left mouse drag\t\t\tselect text in Visual mode",
            "Middle mouse click\t\tpaste text from the clipboard",
            "Right mouse click\t\textend the selected text until the mouse",
            "\t\t\t\tpointer",
            "",
        ]),
        doc(vec![block(
            Table,
            vec![
                leaf(TableRow, &["Left mouse click\t\tposition the cursor"]),
                leaf(TableRow, &["Left mouse drag\t\t\tselect text in Visual mode"]),
                leaf(TableRow, &["Middle mouse click\t\tpaste text from the clipboard"]),
                leaf(
                    TableRow,
                    &["Right mouse click\t\textend the selected text until the mouse", "\t\t\t\tpointer"]
                ),
            ]
        )])
    );
}

// Outline snapshots

#[test]
fn outline_of_a_list_item_with_an_example() {
    let tree = tree(&["", "1) lorem ipsum >", "\t:command", "<   dolor sit amet", ""]);
    insta::assert_snapshot!(outline(&tree), @r#"
    document
      orderedList
        listItem
          paragraph
            "1) lorem ipsum >"
          commandBlock
            "\t:command"
          paragraph
            "<   dolor sit amet"
    "#);
}

// Rendering

#[test]
fn renders_a_page_excerpt() {
    let lines = [
        "==============================================================================",
        "*02.1*\tRunning Vim for the First Time",
        "",
        "To start Vim, enter this command: >",
        "",
        "\tgvim file.txt",
        "",
        "In UNIX you can type this at any command prompt.  See |notation| and press",
        "CTRL-W k to move.",
        "",
    ];
    let html = render_document("usr_02", &grammar(), &lines, &sample_xref()).unwrap();

    insta::assert_snapshot!(html, @r##"<h2 id="02.1"><a href="#02.1" class="header-anchor">02.1</a>Running Vim for the First Time</h2><p>To start Vim, enter this command:</p><pre class="command-block"><code>gvim file.txt</code></pre><p>In UNIX you can type this at any command prompt.  See <a href="/intro#notation" class="tag link">notation</a> and press <code><kbd>CTRL&#8209;W</kbd> k</code> to move.</p>"##);
}

#[test]
fn raw_blocks_are_not_formatted() {
    let html = render_document("usr_01", &grammar(), &["", "\t_word_ CTRL-W |notation|", ""], &sample_xref())
        .unwrap();
    assert_eq!(html, "<pre>_word_ CTRL-W |notation|</pre>");
}

#[test]
fn empty_documents_render_to_nothing() {
    let html = render_document::<&str>("usr_01", &grammar(), &[], &sample_xref()).unwrap();
    assert_eq!(html, "");

    let html = render_document("usr_01", &grammar(), &["", "", ""], &sample_xref()).unwrap();
    assert_eq!(html, "");
}

#[test]
fn malformed_section_headers_fail_the_page() {
    let lines = ["=====", "Header without a number", ""];
    let err = render_document("usr_05", &grammar(), &lines, &sample_xref()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "usr_05: section header without a `*NN.N*` number: `Header without a number`"
    );
}

// Properties

const SAMPLE: &[&str] = &[
    "",
    "|03.1|\tWord movement",
    "",
    "==============================================================================",
    "*03.1*\tWord movement",
    "",
    "To move the cursor forward one word, use the \"w\" command: >",
    "",
    "\tw",
    "",
    "\tNote:",
    "\tThis is a note.",
    "",
    "1) first",
    "2) second >",
    "\t:second",
    "",
    "Keys:",
    "",
    "\tkey\tmeaning\t~",
    "\tw\tword",
    "\te\tend",
    "",
    "SOMETHING DIFFERENT\t\t*tag*",
    "",
];

#[test]
fn build_is_deterministic() {
    let grammar = grammar();
    assert_eq!(build(&grammar, SAMPLE), build(&grammar, SAMPLE));
}

#[test]
fn cleaning_is_idempotent() {
    let grammar = grammar();
    let once = build(&grammar, SAMPLE);
    assert_eq!(clean(once.clone()), once);
}

#[test]
fn open_path_collapses_to_the_root() {
    let grammar = grammar();
    let mut builder = TreeBuilder::new(&grammar);
    for index in 0..SAMPLE.len() {
        builder.push(SAMPLE, index);
    }
    assert_eq!(builder.open_path(), vec![Document]);
}

#[test]
fn every_line_is_claimed() {
    let grammar = grammar();
    let doc = parse_document(&grammar, SAMPLE);

    // The separator is the only line no block wants.
    assert_eq!(
        doc.unclaimed.dropped_lines,
        vec!["==============================================================================".to_string()]
    );
    invariants(&grammar, &doc.tree);
}
